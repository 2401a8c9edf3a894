//! Release catalog layer
//!
//! - [`release`]: ordered releases with dates, EOL lookups and "how far behind" counts
//! - [`entry`]: bug, CVE, feature and performance entry types
//! - [`index`]: the entry lists and the missing-entries query
//! - [`loader`]: document parsing and whole-catalog validation
//! - [`source`]: bundled or on-disk document sources
//! - [`error`]: load errors

pub mod entry;
pub mod error;
pub mod index;
pub mod loader;
pub mod release;
pub mod source;

pub use entry::{Bug, EntryKind, Feature, PerformanceImprovement, SecurityIssue, Severity};
pub use error::CatalogError;
pub use index::{MissingEntries, ReleaseIndex};
pub use loader::{ReleaseData, ReleaseDocument};
pub use release::{MajorLine, ReleaseDate, VersionCatalog};
pub use source::{BundledSource, FileSource, ReleaseSource};
