//! Reports what a PostgreSQL server is missing: bug fixes, CVEs, features and
//! performance improvements released after its version.
//!
//! ```text
//! raw text ──▶ version::extractor ──▶ VersionNumber
//!                                        │
//!              catalog::ReleaseIndex ◀───┼───▶ catalog::VersionCatalog
//!                         │                         │
//!                         └──▶ report::ReportAssembler ◀┘
//! ```

pub mod catalog;
pub mod config;
pub mod logging;
pub mod report;
pub mod share;
pub mod version;
