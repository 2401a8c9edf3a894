//! Known PostgreSQL releases and their dates

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::catalog::error::CatalogError;
use crate::config::DEFAULT_EOL_SUPPORT_YEARS;
use crate::version::number::VersionNumber;

/// One release in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDate {
    pub version: VersionNumber,
    pub release_date: NaiveDate,
}

/// A major branch with its releases, as shown on the version map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorLine {
    pub major: u32,
    pub first_release_date: NaiveDate,
    pub eol_date: Option<NaiveDate>,
    /// False when `eol_date` was derived from the support window
    pub eol_is_explicit: bool,
    pub is_eol: bool,
    pub releases: Vec<ReleaseDate>,
}

/// Ordered list of known releases.
///
/// Releases are sorted ascending by version; that order is the only basis for
/// "released after" questions. Dates are used for display and EOL arithmetic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCatalog {
    /// Sorted ascending, unique, never empty
    releases: Vec<ReleaseDate>,
    eol_overrides: BTreeMap<u32, NaiveDate>,
    support_years: u32,
}

impl VersionCatalog {
    pub fn new(
        mut releases: Vec<ReleaseDate>,
        eol_overrides: BTreeMap<u32, NaiveDate>,
    ) -> Result<Self, CatalogError> {
        if releases.is_empty() {
            return Err(CatalogError::Empty);
        }

        releases.sort_by(|a, b| a.version.compare(&b.version));
        if let Some(pair) = releases.windows(2).find(|w| w[0].version == w[1].version) {
            return Err(CatalogError::DuplicateVersion(pair[0].version.to_string()));
        }

        Ok(Self {
            releases,
            eol_overrides,
            support_years: DEFAULT_EOL_SUPPORT_YEARS,
        })
    }

    /// Length of the support window used when a major has no explicit EOL date.
    pub fn with_support_years(mut self, years: u32) -> Self {
        self.support_years = years;
        self
    }

    pub fn sorted_ascending(&self) -> &[ReleaseDate] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn contains(&self, version: &VersionNumber) -> bool {
        self.releases
            .binary_search_by(|r| r.version.compare(version))
            .is_ok()
    }

    /// Index of the first release strictly newer than `version`, or `None` when
    /// `version` is at or beyond the newest known release.
    pub fn position_after(&self, version: &VersionNumber) -> Option<usize> {
        let index = self
            .releases
            .partition_point(|r| !r.version.is_strictly_newer(version));
        (index < self.releases.len()).then_some(index)
    }

    pub fn releases_after(&self, version: &VersionNumber) -> &[ReleaseDate] {
        match self.position_after(version) {
            Some(index) => &self.releases[index..],
            None => &[],
        }
    }

    /// New majors (`X.0.0`) released after `version`.
    pub fn count_major_releases_after(&self, version: &VersionNumber) -> usize {
        self.releases_after(version)
            .iter()
            .filter(|r| {
                r.version.minor == 0 && r.version.patch == 0 && r.version.major != version.major
            })
            .count()
    }

    /// New minors on `version`'s own branch released after it. Patch-only releases
    /// are not counted.
    pub fn count_minor_releases_after(&self, version: &VersionNumber) -> usize {
        self.releases_after(version)
            .iter()
            .filter(|r| {
                r.version.major == version.major
                    && r.version.minor != version.minor
                    && r.version.patch == 0
            })
            .count()
    }

    pub fn latest_version(&self) -> VersionNumber {
        // non-empty by construction
        self.releases[self.releases.len() - 1].version
    }

    pub fn is_latest(&self, version: &VersionNumber) -> bool {
        self.position_after(version).is_none()
    }

    /// Release date of `version`'s `major.minor` release. The patch part is ignored.
    pub fn release_date_of(&self, version: &VersionNumber) -> Option<NaiveDate> {
        self.releases
            .iter()
            .find(|r| r.version.major == version.major && r.version.minor == version.minor)
            .map(|r| r.release_date)
    }

    pub fn first_release_date(&self, major: u32) -> Option<NaiveDate> {
        self.releases
            .iter()
            .find(|r| r.version.major == major)
            .map(|r| r.release_date)
    }

    /// Explicit EOL date when recorded, otherwise first release plus the support window.
    /// `None` when the major is unknown.
    pub fn eol_date_for(&self, major: u32) -> Option<NaiveDate> {
        if let Some(date) = self.eol_overrides.get(&major) {
            return Some(*date);
        }
        self.first_release_date(major)?
            .checked_add_months(Months::new(self.support_years.saturating_mul(12)))
    }

    pub fn is_eol(&self, major: u32, today: NaiveDate) -> bool {
        self.eol_date_for(major).is_some_and(|eol| eol < today)
    }

    /// Releases grouped per major, oldest major first.
    pub fn major_lines(&self, today: NaiveDate) -> Vec<MajorLine> {
        let mut lines: Vec<MajorLine> = Vec::new();

        for release in &self.releases {
            match lines.last_mut() {
                Some(line) if line.major == release.version.major => line.releases.push(*release),
                _ => {
                    let major = release.version.major;
                    lines.push(MajorLine {
                        major,
                        first_release_date: release.release_date,
                        eol_date: self.eol_date_for(major),
                        eol_is_explicit: self.eol_overrides.contains_key(&major),
                        is_eol: self.is_eol(major, today),
                        releases: vec![*release],
                    });
                }
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn release(version: &str, release_date: &str) -> ReleaseDate {
        ReleaseDate {
            version: VersionNumber::parse(version).unwrap(),
            release_date: date(release_date),
        }
    }

    /// 15.0-15.8 and 16.0-16.4, deliberately out of order
    fn catalog() -> VersionCatalog {
        let releases = vec![
            release("16.0", "2023-09-14"),
            release("15.0", "2022-10-13"),
            release("15.1", "2022-11-10"),
            release("15.2", "2023-02-09"),
            release("15.3", "2023-05-11"),
            release("15.4", "2023-08-10"),
            release("15.5", "2023-11-09"),
            release("16.1", "2023-11-09"),
            release("15.6", "2024-02-08"),
            release("16.2", "2024-02-08"),
            release("15.7", "2024-05-09"),
            release("16.3", "2024-05-09"),
            release("15.8", "2024-08-08"),
            release("16.4", "2024-08-08"),
        ];
        let eol = BTreeMap::from([(15, date("2027-11-11"))]);
        VersionCatalog::new(releases, eol).unwrap()
    }

    fn v(raw: &str) -> VersionNumber {
        VersionNumber::parse(raw).unwrap()
    }

    #[test]
    fn sorted_ascending_orders_by_version() {
        let catalog = catalog();
        let versions: Vec<String> = catalog
            .sorted_ascending()
            .iter()
            .map(|r| r.version.to_string())
            .collect();

        assert_eq!(versions.first().map(String::as_str), Some("15.0"));
        assert_eq!(versions[8], "15.8");
        assert_eq!(versions[9], "16.0");
        assert_eq!(versions.last().map(String::as_str), Some("16.4"));
    }

    #[rstest]
    #[case("15.8", Some(9))]
    #[case("15.7", Some(8))]
    #[case("14.9", Some(0))]
    #[case("16.3.2", Some(13))]
    #[case("16.4", None)]
    #[case("17.0", None)]
    fn position_after_returns_first_strictly_newer(
        #[case] version: &str,
        #[case] expected: Option<usize>,
    ) {
        let catalog = catalog();
        assert_eq!(catalog.position_after(&v(version)), expected);
    }

    #[rstest]
    #[case("15.2", 1, 6)]
    #[case("15.8", 1, 0)]
    #[case("16.0", 0, 4)]
    #[case("16.4", 0, 0)]
    #[case("14.13", 2, 0)]
    fn counts_releases_after(
        #[case] version: &str,
        #[case] majors: usize,
        #[case] minors: usize,
    ) {
        let catalog = catalog();
        assert_eq!(catalog.count_major_releases_after(&v(version)), majors);
        assert_eq!(catalog.count_minor_releases_after(&v(version)), minors);
    }

    #[test]
    fn patch_releases_are_not_counted() {
        let catalog = VersionCatalog::new(
            vec![
                release("16.1", "2023-11-09"),
                release("16.1.1", "2023-11-20"),
                release("16.2", "2024-02-08"),
            ],
            BTreeMap::new(),
        )
        .unwrap();

        assert_eq!(catalog.count_minor_releases_after(&v("16.1")), 1);
        assert_eq!(catalog.releases_after(&v("16.1")).len(), 2);
    }

    #[test]
    fn latest_version_is_latest_and_has_nothing_after() {
        let catalog = catalog();
        let latest = catalog.latest_version();

        assert_eq!(latest, v("16.4"));
        assert!(catalog.is_latest(&latest));
        assert_eq!(catalog.count_major_releases_after(&latest), 0);
        assert_eq!(catalog.count_minor_releases_after(&latest), 0);
        assert!(!catalog.is_latest(&v("16.3")));
    }

    #[test]
    fn eol_date_prefers_override_then_derives_five_years() {
        let catalog = catalog();
        assert_eq!(catalog.eol_date_for(15), Some(date("2027-11-11")));
        assert_eq!(catalog.eol_date_for(16), Some(date("2028-09-14")));
        assert_eq!(catalog.eol_date_for(9), None);
    }

    #[test]
    fn support_years_changes_derived_eol() {
        let catalog = catalog().with_support_years(3);
        assert_eq!(catalog.eol_date_for(16), Some(date("2026-09-14")));
        assert_eq!(catalog.eol_date_for(15), Some(date("2027-11-11")));
    }

    #[test]
    fn release_date_of_ignores_patch() {
        let catalog = catalog();
        assert_eq!(catalog.release_date_of(&v("16.2.7")), Some(date("2024-02-08")));
        assert_eq!(catalog.release_date_of(&v("16.9")), None);
    }

    #[test]
    fn major_lines_group_releases() {
        let catalog = catalog();
        let lines = catalog.major_lines(date("2028-01-01"));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].major, 15);
        assert_eq!(lines[0].releases.len(), 9);
        assert!(lines[0].is_eol);
        assert!(lines[0].eol_is_explicit);
        assert_eq!(lines[1].major, 16);
        assert_eq!(lines[1].first_release_date, date("2023-09-14"));
        assert!(!lines[1].is_eol);
        assert!(!lines[1].eol_is_explicit);
    }

    #[test]
    fn new_rejects_empty_and_duplicates() {
        assert!(matches!(
            VersionCatalog::new(vec![], BTreeMap::new()),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            VersionCatalog::new(
                vec![release("16.1", "2023-11-09"), release("16.1.0", "2023-11-10")],
                BTreeMap::new()
            ),
            Err(CatalogError::DuplicateVersion(v)) if v == "16.1"
        ));
    }
}
