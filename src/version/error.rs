use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The leading segment is missing or is not a non-negative integer.
    #[error("Invalid major version in '{0}'")]
    InvalidMajor(String),
}
