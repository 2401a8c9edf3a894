//! Version layer: parsing, extraction and the classification rule
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Extractor  │────▶│   Number    │◀────│    Rule     │
//! │ (free text) │     │(parse, cmp) │     │ (missing?)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    Cache    │
//! │ (memoise)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`number`]: `VersionNumber` parsing and ordering
//! - [`extractor`]: pulls the version out of `SELECT version();` output
//! - [`rule`]: the single "is this entry missing" rule and its per-category scopes
//! - [`cache`]: optional memoisation of parsed version strings
//! - [`error`]: parse errors

pub mod cache;
pub mod error;
pub mod extractor;
pub mod number;
pub mod rule;

pub use cache::ParseCache;
pub use error::VersionError;
pub use number::VersionNumber;
pub use rule::{BackportScope, ClassificationRules, is_missing};
