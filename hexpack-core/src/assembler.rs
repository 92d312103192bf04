//! Package assembly: the ordered row list and its derived checksum
//!
//! All mutation goes through [`PackageAssembler`], which recomputes the
//! payload and checksum after every change. No operation here surfaces a
//! failure: malformed values degrade to skipped bytes and an invalidity
//! flag on the owning row.

use crate::checksum::crc8;
use crate::normalize::normalize;
use crate::types::{Package, Row, RowRecord};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::warn;

/// Owns the ordered row sequence and the derived package state
#[derive(Debug, Clone, Default)]
pub struct PackageAssembler {
    rows: Vec<Row>,
    checksum: u8,
}

impl PackageAssembler {
    /// Create an assembler with no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler from stored records, re-normalizing every value
    pub fn from_records(records: Vec<RowRecord>) -> Self {
        let mut assembler = Self::new();
        assembler.replace_all_rows(records);
        assembler
    }

    /// Append an empty row
    ///
    /// The new row contributes zero bytes until edited, so the checksum is
    /// unchanged; it is recomputed anyway to keep the invariant in one place.
    pub fn add_row(&mut self) {
        self.rows.push(Row::empty());
        self.recompute();
    }

    /// Remove the row at `index`
    ///
    /// An out-of-range index is a logged no-op.
    pub fn remove_row(&mut self, index: usize) {
        if index >= self.rows.len() {
            warn!(index, len = self.rows.len(), "remove_row index out of range");
            return;
        }
        self.rows.remove(index);
        self.recompute();
    }

    /// Normalize `raw` and store it as the value of the row at `index`
    pub fn update_row_value(&mut self, index: usize, raw: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            warn!(index, len = self.rows.len(), "update_row_value index out of range");
            return;
        };
        let n = normalize(raw);
        row.value = n.text;
        row.invalid = n.invalid;
        self.recompute();
    }

    /// Store `text` as the description of the row at `index`
    pub fn update_row_description(&mut self, index: usize, text: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            warn!(index, len = self.rows.len(), "update_row_description index out of range");
            return;
        };
        row.description = text.to_string();
    }

    /// Replace the whole row sequence from stored records
    ///
    /// Every loaded value passes through the normalizer before the checksum
    /// is computed.
    pub fn replace_all_rows(&mut self, records: Vec<RowRecord>) {
        self.rows = records.into_iter().map(Row::from_record).collect();
        self.recompute();
    }

    /// Current rows, in package byte order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Persisted shape of the current rows
    pub fn records(&self) -> Vec<RowRecord> {
        self.rows.iter().map(Row::record).collect()
    }

    /// Pure read of the derived package state
    pub fn package(&self) -> Package {
        Package::new(self.payload_bytes(), self.checksum)
    }

    /// Current checksum byte
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    fn payload_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();
        for row in &self.rows {
            for byte in row.bytes() {
                buf.put_u8(byte);
            }
        }
        buf.freeze()
    }

    fn recompute(&mut self) {
        self.checksum = crc8(&self.payload_bytes());
    }
}
