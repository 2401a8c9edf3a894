//! Links into the postgresql.org release notes

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use pulldown_cmark::{Event, Parser, TagEnd};
use regex::Regex;

use crate::version::number::VersionNumber;

const RELEASE_NOTES_BASE: &str = "https://www.postgresql.org/docs/release";

/// Characters left alone by JavaScript's `encodeURIComponent`, minus `-`, which
/// text fragments treat as a range separator and must stay encoded.
const TEXT_FRAGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub fn release_notes_url(version: &VersionNumber) -> String {
    format!("{}/{}/", RELEASE_NOTES_BASE, version.release_key())
}

/// Release notes URL scrolled to `markdown`'s text via a `#:~:text=` fragment.
pub fn release_notes_deep_link(version: &VersionNumber, markdown: &str) -> String {
    let text = markdown_to_plain_text(markdown);
    format!(
        "{}#:~:text={}",
        release_notes_url(version),
        utf8_percent_encode(&text, TEXT_FRAGMENT_ENCODE_SET)
    )
}

/// Rendered text of `markdown`: what the release-notes page shows for it.
fn markdown_to_plain_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }

    let text = WHITESPACE_RE.replace_all(text.trim(), " ");
    text.replace('§', "").trim().to_string()
}
