//! # Hexpack Core
//!
//! Engine for interactively assembling a binary "byte package": an ordered
//! sequence of hex byte values, each carrying a free-text description, framed
//! by a fixed start byte and a trailing CRC-8 checksum byte.
//!
//! ## Modules
//!
//! - `constants`: Package framing constants and formatting widths
//! - `normalize`: Raw text to valid uppercase hex digit strings
//! - `checksum`: CRC-8 over the payload bytes
//! - `types`: Core types (Row, RowRecord, Package)
//! - `assembler`: Ordered row list with derived package state
//! - `export`: Flat hex and grouped Markdown encodings
//! - `store`: JSON-backed session and preset storage

#![warn(missing_docs)]

pub mod assembler;
pub mod checksum;
pub mod constants;
pub mod error;
pub mod export;
pub mod normalize;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use assembler::PackageAssembler;
pub use checksum::crc8;
pub use error::PackError;
pub use normalize::{normalize, Normalized};
pub use types::{Package, Row, RowRecord};

/// Result type alias for Hexpack operations
pub type Result<T> = core::result::Result<T, PackError>;
