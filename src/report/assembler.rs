//! Builds a [`VersionReport`] from raw `SELECT version();` output

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::catalog::loader::ReleaseData;
use crate::config::ReportConfig;
use crate::report::types::{ReportError, VersionReport};
use crate::version::cache::ParseCache;
use crate::version::extractor;
use crate::version::number::VersionNumber;

/// Orchestrates extraction, classification and the date arithmetic of a report.
///
/// Borrows the catalog read-only; reports borrow their entries from it.
pub struct ReportAssembler<'a> {
    data: &'a ReleaseData,
    config: ReportConfig,
    cache: ParseCache,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(data: &'a ReleaseData, config: ReportConfig) -> Self {
        let cache = if config.parse_cache {
            ParseCache::new()
        } else {
            ParseCache::disabled()
        };
        Self {
            data,
            config,
            cache,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Report for free text such as `PostgreSQL 16.4 on x86_64-pc-linux-gnu, ...`.
    pub fn assemble(&self, raw: &str, today: NaiveDate) -> Result<VersionReport<'a>, ReportError> {
        if raw.trim().is_empty() {
            return Err(ReportError::NoInput);
        }

        let version =
            extractor::extract_with(raw, Some(&self.cache))?.ok_or(ReportError::ExtractionMiss)?;

        self.assemble_version(version, today)
    }

    /// Report for an already parsed version.
    pub fn assemble_version(
        &self,
        version: VersionNumber,
        today: NaiveDate,
    ) -> Result<VersionReport<'a>, ReportError> {
        let floor = self.config.minimum_supported_major;
        if version.major < floor {
            info!("Version {} is below supported major {}", version, floor);
            return Err(ReportError::UnsupportedVersion { version, floor });
        }

        let versions = &self.data.versions;
        let major_versions_behind = versions.count_major_releases_after(&version);
        let minor_versions_behind = versions.count_minor_releases_after(&version);

        let release_date = versions.release_date_of(&version);
        let eol_date = versions.eol_date_for(version.major);

        let supported_majors = versions
            .major_lines(today)
            .into_iter()
            .filter(|line| !line.is_eol)
            .collect();

        let report = VersionReport {
            version,
            latest_version: versions.latest_version(),
            position_after: versions.position_after(&version),
            major_versions_behind,
            minor_versions_behind,
            releases_since: versions.releases_after(&version).len(),
            is_latest: major_versions_behind == 0 && minor_versions_behind == 0,
            release_date,
            days_since_release: release_date.map(|date| (today - date).num_days()),
            eol_date,
            days_until_eol: eol_date.map(|date| (date - today).num_days()),
            is_eol: versions.is_eol(version.major, today),
            supported_majors,
            missing: self.data.index.query(&version, &self.config.rules),
        };

        debug!(
            "Report for {}: {} major / {} minor behind, {} missing entries",
            version,
            report.major_versions_behind,
            report.minor_versions_behind,
            report.missing.total()
        );

        Ok(report)
    }
}
