//! Error types for Hexpack operations
//!
//! The data path (normalize, checksum, assemble, export) never fails:
//! malformed input is flagged and degraded, not rejected. Errors exist only
//! at the storage boundary.

/// Errors that can occur at the Hexpack storage boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackError {
    /// IO error during read/write
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PackError {
    fn from(err: serde_json::Error) -> Self {
        PackError::Serialization(err.to_string())
    }
}
