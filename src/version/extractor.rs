//! Extracts the server version from `SELECT version();` output

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::cache::ParseCache;
use crate::version::error::VersionError;
use crate::version::number::VersionNumber;

/// `PostgreSQL` followed by whitespace and a dotted number, e.g.
/// `PostgreSQL 16.4 on x86_64-pc-linux-gnu, compiled by gcc ...`
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PostgreSQL\s+([0-9.]+)").unwrap());

/// Returns the raw version token of the first match, if any.
pub fn find_version_token(text: &str) -> Option<&str> {
    VERSION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the version from free text.
///
/// - `Ok(None)`: no `PostgreSQL <version>` in the text. This is the common case for
///   partial or garbled pastes.
/// - `Err(_)`: the pattern matched but its major segment is unusable (`PostgreSQL .5`).
pub fn extract(text: &str) -> Result<Option<VersionNumber>, VersionError> {
    extract_with(text, None)
}

/// Same as [`extract`], going through a parse cache when one is given.
pub fn extract_with(
    text: &str,
    cache: Option<&ParseCache>,
) -> Result<Option<VersionNumber>, VersionError> {
    let Some(token) = find_version_token(text) else {
        debug!("No PostgreSQL version pattern in input");
        return Ok(None);
    };

    let version = match cache {
        Some(cache) => cache.get_or_parse(token)?,
        None => VersionNumber::parse(token)?,
    };
    debug!("Extracted version {} from token '{}'", version, token);
    Ok(Some(version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "PostgreSQL 16.4 on x86_64-pc-linux-gnu, compiled by gcc (Debian 10.2.1-6) 10.2.1 20210110, 64-bit",
        Some(VersionNumber::new(16, 4, 0))
    )]
    #[case(
        "PostgreSQL 16.1 on aarch64-unknown-linux-gnu, compiled by aarch64-unknown-linux-gnu-gcc (GCC) 9.5.0, 64-bit",
        Some(VersionNumber::new(16, 1, 0))
    )]
    #[case("PostgreSQL 9.6.24 on x86_64", Some(VersionNumber::new(9, 6, 24)))]
    #[case("version\n---------\nPostgreSQL\t15.8 (Ubuntu)", Some(VersionNumber::new(15, 8, 0)))]
    #[case("PostgreSQL 14.2 then PostgreSQL 17.0", Some(VersionNumber::new(14, 2, 0)))]
    #[case("no version here", None)]
    #[case("", None)]
    #[case("postgresql 16.4", None)]
    #[case("PostgreSQL16.4", None)]
    #[case("PostgreSQL on linux", None)]
    fn extract_returns_expected(#[case] text: &str, #[case] expected: Option<VersionNumber>) {
        assert_eq!(extract(text), Ok(expected));
    }

    #[test]
    fn extract_reports_invalid_major_after_match() {
        assert_eq!(
            extract("PostgreSQL .5 on x86_64"),
            Err(VersionError::InvalidMajor(".5".to_string()))
        );
    }

    #[test]
    fn extract_with_cache_matches_uncached_result() {
        let cache = ParseCache::new();
        let text = "PostgreSQL 13.16 on x86_64-pc-linux-gnu";

        assert_eq!(extract_with(text, Some(&cache)), extract(text));
        assert_eq!(extract_with(text, Some(&cache)), extract(text));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn extract_survives_arbitrary_bytes() {
        let text = "\u{0}\u{FFFD}PostgreSQL ä 16.4 ö PostgreSQL";
        assert_eq!(extract(text), Ok(None));
    }
}
