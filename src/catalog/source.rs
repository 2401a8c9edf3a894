//! Where the release catalog document comes from

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::catalog::error::CatalogError;

const BUNDLED_CATALOG: &str = include_str!("../../data/pg_release_data.json");

/// Supplies the raw catalog document
#[cfg_attr(test, automock)]
pub trait ReleaseSource {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    fn read_document(&self) -> Result<String, CatalogError>;
}

/// The catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl ReleaseSource for BundledSource {
    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }

    fn read_document(&self) -> Result<String, CatalogError> {
        Ok(BUNDLED_CATALOG.to_string())
    }
}

/// A catalog document on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReleaseSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_document(&self) -> Result<String, CatalogError> {
        std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
