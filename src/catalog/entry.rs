//! Release entries: bug fixes, CVEs, features and performance improvements

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::number::VersionNumber;

/// Category of a release entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Bug,
    Security,
    Feature,
    Performance,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Bug => "bug",
            EntryKind::Security => "CVE",
            EntryKind::Feature => "feature",
            EntryKind::Performance => "performance improvement",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common view over every entry variant
pub trait ReleaseEntry {
    const KIND: EntryKind;

    /// The release that fixed or introduced the entry
    fn tagged_version(&self) -> &VersionNumber;

    fn title(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Bug {
    pub title: String,
    pub description: String,
    pub fixed_in: VersionNumber,
    pub cve: Option<String>,
    pub contributors: Vec<String>,
}

/// CVSS-style severity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// HIGH and CRITICAL are shown as urgent.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SecurityIssue {
    pub title: String,
    pub description: String,
    pub fixed_in: VersionNumber,
    pub cve: Option<String>,
    pub contributors: Vec<String>,
    pub impact_score: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub since_version: VersionNumber,
    pub significant: bool,
    pub contributors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PerformanceImprovement {
    pub title: String,
    pub description: String,
    pub since_version: VersionNumber,
    pub significant: bool,
    pub contributors: Vec<String>,
}

impl ReleaseEntry for Bug {
    const KIND: EntryKind = EntryKind::Bug;

    fn tagged_version(&self) -> &VersionNumber {
        &self.fixed_in
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl ReleaseEntry for SecurityIssue {
    const KIND: EntryKind = EntryKind::Security;

    fn tagged_version(&self) -> &VersionNumber {
        &self.fixed_in
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl ReleaseEntry for Feature {
    const KIND: EntryKind = EntryKind::Feature;

    fn tagged_version(&self) -> &VersionNumber {
        &self.since_version
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl ReleaseEntry for PerformanceImprovement {
    const KIND: EntryKind = EntryKind::Performance;

    fn tagged_version(&self) -> &VersionNumber {
        &self.since_version
    }

    fn title(&self) -> &str {
        &self.title
    }
}
