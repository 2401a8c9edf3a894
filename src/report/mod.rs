//! Report layer
//!
//! - [`assembler`]: extract → classify → dates, producing a [`VersionReport`]
//! - [`types`]: the report value and the [`ReportError`] outcomes
//! - [`render`]: plain-text output
//! - [`links`]: release-notes URLs

pub mod assembler;
pub mod links;
pub mod render;
pub mod types;

pub use assembler::ReportAssembler;
pub use types::{ReportError, VersionReport};
