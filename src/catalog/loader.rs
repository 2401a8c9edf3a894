//! Loading and validating the catalog document
//!
//! The document is validated as a whole before anything is served: schema errors,
//! bad dates, and entries tagged with releases the catalog does not know all fail
//! the load.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::entry::{Bug, Feature, PerformanceImprovement, ReleaseEntry, SecurityIssue};
use crate::catalog::error::CatalogError;
use crate::catalog::index::ReleaseIndex;
use crate::catalog::release::{ReleaseDate, VersionCatalog};
use crate::catalog::source::ReleaseSource;
use crate::version::number::VersionNumber;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// On-disk shape of the catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ReleaseDocument {
    /// `"<major>.<minor>" -> "YYYY-MM-DD"`
    pub version_dates: IndexMap<String, String>,
    /// `"<major>" -> "YYYY-MM-DD"`
    #[serde(default)]
    pub eol_dates: IndexMap<String, String>,
    pub bugs: Vec<Bug>,
    pub cves: Vec<SecurityIssue>,
    pub features: Vec<Feature>,
    pub performance_improvements: Vec<PerformanceImprovement>,
}

/// The validated, read-only catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseData {
    pub versions: VersionCatalog,
    pub index: ReleaseIndex,
}

impl ReleaseData {
    pub fn load(source: &dyn ReleaseSource) -> Result<Self, CatalogError> {
        info!("Loading release catalog from {}", source.describe());
        let document = source.read_document()?;
        let data = Self::from_json_str(&document)?;
        info!(
            "Loaded {} releases and {} entries, latest is {}",
            data.versions.len(),
            data.index.len(),
            data.versions.latest_version()
        );
        Ok(data)
    }

    /// See [`VersionCatalog::with_support_years`].
    pub fn with_support_years(mut self, years: u32) -> Self {
        self.versions = self.versions.with_support_years(years);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: ReleaseDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_document(document: ReleaseDocument) -> Result<Self, CatalogError> {
        let releases = document
            .version_dates
            .iter()
            .map(|(key, value)| {
                let version =
                    VersionNumber::parse(key).map_err(|source| CatalogError::InvalidVersion {
                        key: key.clone(),
                        source,
                    })?;
                Ok(ReleaseDate {
                    version,
                    release_date: parse_date(key, value)?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let eol_overrides = document
            .eol_dates
            .iter()
            .map(|(key, value)| Ok((parse_major_key(key)?, parse_date(key, value)?)))
            .collect::<Result<BTreeMap<_, _>, CatalogError>>()?;

        let versions = VersionCatalog::new(releases, eol_overrides)?;

        ensure_known(&versions, &document.bugs)?;
        ensure_known(&versions, &document.cves)?;
        ensure_known(&versions, &document.features)?;
        ensure_known(&versions, &document.performance_improvements)?;

        if let Some(issue) = document
            .cves
            .iter()
            .find(|issue| !(0.0..=10.0).contains(&issue.impact_score))
        {
            return Err(CatalogError::ImpactScoreOutOfRange {
                title: issue.title.clone(),
                score: issue.impact_score,
            });
        }

        debug!("Catalog document validated");

        Ok(Self {
            versions,
            index: ReleaseIndex::new(
                document.bugs,
                document.cves,
                document.features,
                document.performance_improvements,
            ),
        })
    }
}

fn parse_date(key: &str, value: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| CatalogError::InvalidDate {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// EOL dates are keyed by a bare major in canonical form, so `"16"` and
/// `"16.0"` cannot both name major 16.
fn parse_major_key(key: &str) -> Result<u32, CatalogError> {
    let major = VersionNumber::parse(key)
        .map_err(|source| CatalogError::InvalidVersion {
            key: key.to_string(),
            source,
        })?
        .major;
    if major.to_string() != key {
        return Err(CatalogError::InvalidEolKey(key.to_string()));
    }
    Ok(major)
}

fn ensure_known<E: ReleaseEntry>(
    versions: &VersionCatalog,
    entries: &[E],
) -> Result<(), CatalogError> {
    match entries
        .iter()
        .find(|entry| !versions.contains(entry.tagged_version()))
    {
        Some(entry) => Err(CatalogError::UnknownVersion {
            kind: E::KIND.as_str(),
            title: entry.title().to_string(),
            version: entry.tagged_version().to_string(),
        }),
        None => Ok(()),
    }
}
