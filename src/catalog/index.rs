//! Release entries and the "what is this version missing" query

use serde::Serialize;
use tracing::debug;

use crate::catalog::entry::{Bug, Feature, PerformanceImprovement, ReleaseEntry, SecurityIssue};
use crate::version::number::VersionNumber;
use crate::version::rule::{BackportScope, ClassificationRules, is_missing};

/// The four immutable entry lists of the catalog, in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseIndex {
    bugs: Vec<Bug>,
    security: Vec<SecurityIssue>,
    features: Vec<Feature>,
    performance: Vec<PerformanceImprovement>,
}

/// Entries a version does not have yet, borrowed from the index in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingEntries<'a> {
    pub bugs: Vec<&'a Bug>,
    pub security: Vec<&'a SecurityIssue>,
    pub features: Vec<&'a Feature>,
    pub performance: Vec<&'a PerformanceImprovement>,
}

impl MissingEntries<'_> {
    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
            && self.security.is_empty()
            && self.features.is_empty()
            && self.performance.is_empty()
    }

    pub fn total(&self) -> usize {
        self.bugs.len() + self.security.len() + self.features.len() + self.performance.len()
    }

    /// Security issues rated HIGH or CRITICAL
    pub fn urgent_security(&self) -> impl Iterator<Item = &SecurityIssue> {
        self.security
            .iter()
            .copied()
            .filter(|issue| issue.severity.is_urgent())
    }
}

impl ReleaseIndex {
    pub fn new(
        bugs: Vec<Bug>,
        security: Vec<SecurityIssue>,
        features: Vec<Feature>,
        performance: Vec<PerformanceImprovement>,
    ) -> Self {
        Self {
            bugs,
            security,
            features,
            performance,
        }
    }

    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    pub fn security(&self) -> &[SecurityIssue] {
        &self.security
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn performance(&self) -> &[PerformanceImprovement] {
        &self.performance
    }

    pub fn len(&self) -> usize {
        self.bugs.len() + self.security.len() + self.features.len() + self.performance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every entry `version` is missing, per category scope in `rules`.
    pub fn query(&self, version: &VersionNumber, rules: &ClassificationRules) -> MissingEntries<'_> {
        let missing = MissingEntries {
            bugs: filter_missing(&self.bugs, version, rules.bugs),
            security: filter_missing(&self.security, version, rules.security),
            features: filter_missing(&self.features, version, rules.features),
            performance: filter_missing(&self.performance, version, rules.performance),
        };

        debug!(
            "Version {} is missing {} bugs, {} CVEs, {} features, {} performance improvements",
            version,
            missing.bugs.len(),
            missing.security.len(),
            missing.features.len(),
            missing.performance.len()
        );

        missing
    }
}

fn filter_missing<'a, E: ReleaseEntry>(
    entries: &'a [E],
    version: &VersionNumber,
    scope: BackportScope,
) -> Vec<&'a E> {
    entries
        .iter()
        .filter(|entry| is_missing(entry.tagged_version(), version, scope))
        .collect()
}
