//! Report value and the recoverable outcomes that replace it

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::index::MissingEntries;
use crate::catalog::release::MajorLine;
use crate::version::error::VersionError;
use crate::version::number::VersionNumber;

/// Reasons no report could be produced. All are user errors and recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("No version entered")]
    NoInput,

    #[error("No PostgreSQL version found in input")]
    ExtractionMiss,

    #[error("Invalid version in input: {0}")]
    InvalidMajorSegment(#[from] VersionError),

    #[error("PostgreSQL {version} is older than the oldest supported major {floor}")]
    UnsupportedVersion { version: VersionNumber, floor: u32 },
}

impl ReportError {
    /// Wording shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ReportError::NoInput => {
                "Run `SELECT version();` in your PostgreSQL database and paste the result."
                    .to_string()
            }
            ReportError::ExtractionMiss | ReportError::InvalidMajorSegment(_) => {
                "The text you entered is invalid. Please make sure you copied the entire result of the query."
                    .to_string()
            }
            ReportError::UnsupportedVersion { version, .. } => format!(
                "PostgreSQL {version} is very old and no longer receives any fixes. Upgrade immediately."
            ),
        }
    }
}

/// Everything known about a version relative to the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReport<'a> {
    pub version: VersionNumber,
    pub latest_version: VersionNumber,
    /// Index of the first catalog release newer than `version`
    pub position_after: Option<usize>,
    pub major_versions_behind: usize,
    pub minor_versions_behind: usize,
    /// Catalog releases, on any branch, newer than `version`
    pub releases_since: usize,
    pub is_latest: bool,
    pub release_date: Option<NaiveDate>,
    pub days_since_release: Option<i64>,
    pub eol_date: Option<NaiveDate>,
    /// Negative once the EOL date has passed
    pub days_until_eol: Option<i64>,
    pub is_eol: bool,
    /// Major lines not yet EOL, for the version map
    pub supported_majors: Vec<MajorLine>,
    pub missing: MissingEntries<'a>,
}

impl VersionReport<'_> {
    fn short_version(&self) -> String {
        format!("{}.{}", self.version.major, self.version.minor)
    }

    pub fn headline(&self) -> String {
        format!("Postgres {} Version Report", self.short_version())
    }

    pub fn behind_summary(&self) -> String {
        format!(
            "You are {} minor versions behind and {} major versions behind.",
            self.minor_versions_behind, self.major_versions_behind
        )
    }

    pub fn latest_summary(&self) -> String {
        if self.is_latest {
            return "You are using the latest version of PostgreSQL.".to_string();
        }
        format!(
            "The latest version is {}, {} releases since yours.",
            self.latest_version, self.releases_since
        )
    }

    pub fn no_findings(&self) -> Option<&'static str> {
        self.missing
            .is_empty()
            .then_some("No security issues or missing features found in the version you entered.")
    }

    pub fn security_summary(&self) -> String {
        format!(
            "Contributors found and fixed {} CVEs in Postgres after {}",
            self.missing.security.len(),
            self.short_version()
        )
    }

    pub fn bugs_summary(&self) -> String {
        format!(
            "Contributors patched {} bugs in Postgres after {}",
            self.missing.bugs.len(),
            self.short_version()
        )
    }

    pub fn features_summary(&self) -> String {
        format!(
            "Contributors added {} new features to Postgres after {}",
            self.missing.features.len(),
            self.short_version()
        )
    }

    pub fn performance_summary(&self) -> String {
        format!(
            "Contributors shipped {} performance improvements in Postgres after {}",
            self.missing.performance.len(),
            self.short_version()
        )
    }
}
