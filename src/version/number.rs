//! PostgreSQL release numbers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;

/// A `major.minor.patch` release number.
///
/// Ordering is lexicographic on `(major, minor, patch)` compared as integers,
/// so `10.0` sorts after `9.6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionNumber {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string.
    ///
    /// Only the major segment is mandatory. A missing or non-numeric minor or
    /// patch segment becomes `0`, so `"16.abc.2"` parses as `16.0.2`.
    ///
    /// Examples:
    /// - "16" -> 16.0.0
    /// - "16.4" -> 16.4.0
    /// - "9.6.24" -> 9.6.24
    /// - "abc" -> `VersionError::InvalidMajor`
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let mut segments = raw.split('.');

        let major = segments
            .next()
            .and_then(parse_segment)
            .ok_or_else(|| VersionError::InvalidMajor(raw.to_string()))?;
        let minor = segments.next().and_then(parse_segment).unwrap_or(0);
        let patch = segments.next().and_then(parse_segment).unwrap_or(0);

        Ok(Self::new(major, minor, patch))
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    pub fn is_newer_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    pub fn is_strictly_newer(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn same_major(&self, other: &Self) -> bool {
        self.major == other.major
    }

    /// The `major.minor` pair the release catalog is keyed by.
    pub fn release_key(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

/// Digits only: signs, whitespace and suffixes such as `4beta1` are rejected.
fn parse_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VersionNumber> for String {
    fn from(value: VersionNumber) -> Self {
        value.to_string()
    }
}
