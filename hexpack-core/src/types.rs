//! Core types for hexpack packages

use crate::constants::START_BYTE;
use crate::normalize::normalize;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Persisted shape of a row, exchanged with the session/preset store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    /// Hex digit string
    pub value: String,

    /// Free-text description
    pub description: String,
}

/// In-memory row: a hex value, its description, and the derived validity flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Normalized hex digit string (uppercase)
    pub value: String,

    /// Free-text description
    pub description: String,

    /// True iff `value` has odd length after normalization
    pub invalid: bool,
}

impl Row {
    /// Create an empty row
    pub fn empty() -> Self {
        Self {
            value: String::new(),
            description: String::new(),
            invalid: false,
        }
    }

    /// Rebuild a row from a stored record, re-normalizing the value
    ///
    /// Stored data is trusted but still passed through the normalizer.
    pub fn from_record(record: RowRecord) -> Self {
        let n = normalize(&record.value);
        Self {
            value: n.text,
            description: record.description,
            invalid: n.invalid,
        }
    }

    /// The persisted shape of this row
    pub fn record(&self) -> RowRecord {
        RowRecord {
            value: self.value.clone(),
            description: self.description.clone(),
        }
    }

    /// Complete bytes of this row's value, in order
    ///
    /// A trailing odd digit stays visible in `value` but contributes nothing
    /// here; observed checksums depend on that exact behavior. Pairs with
    /// non-hex characters (possible only in hand-built rows that bypassed
    /// the normalizer) are skipped rather than panicking.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.value
            .as_bytes()
            .chunks_exact(2)
            .filter_map(|pair| Some((hex_nibble(pair[0])? << 4) | hex_nibble(pair[1])?))
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::empty()
    }
}

fn hex_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// Derived view of the assembled package; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Fixed first byte
    pub start_byte: u8,

    /// Row bytes in row order, trailing odd digits dropped
    pub payload: Bytes,

    /// CRC-8 over `payload` only (start byte excluded)
    pub checksum: u8,
}

impl Package {
    /// Create a package view from payload bytes and their checksum
    pub fn new(payload: Bytes, checksum: u8) -> Self {
        Self {
            start_byte: START_BYTE,
            payload,
            checksum,
        }
    }

    /// Total number of bytes in the package (start byte + payload + checksum)
    pub fn total_len(&self) -> usize {
        self.payload.len() + 2
    }
}
