//! Share tokens: the raw input text carried in a link's `data` query parameter

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::debug;

pub fn encode(raw: &str) -> String {
    BASE64.encode(raw.as_bytes())
}

/// Decode a token back into the raw text. Accepts the bare token or the
/// percent-encoded `data` value of a [`share_url`]. Anything undecodable becomes
/// the empty string, which reports as "no version entered".
pub fn decode(token: &str) -> String {
    let token = match percent_decode_str(token.trim()).decode_utf8() {
        Ok(token) => token,
        Err(e) => {
            debug!("Ignoring share token with invalid percent-encoding: {}", e);
            return String::new();
        }
    };

    let bytes = match BASE64.decode(token.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Ignoring undecodable share token: {}", e);
            return String::new();
        }
    };

    String::from_utf8(bytes).unwrap_or_else(|e| {
        debug!("Ignoring share token with non UTF-8 payload: {}", e);
        String::new()
    })
}

/// `base` with `?data=<token>` appended. An empty input yields `base` unchanged.
pub fn share_url(base: &str, raw: &str) -> String {
    if raw.is_empty() {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}data={}",
        base,
        separator,
        utf8_percent_encode(&encode(raw), NON_ALPHANUMERIC)
    )
}
