//! Export encodings of an assembled package
//!
//! Two independent, pure encodings: a flat uppercase hex string and a
//! Markdown table that groups consecutive bytes sharing an identical
//! description.

use crate::constants::{
    BYTE_CELL_WIDTH, CHECKSUM_LABEL, DESC_COLUMN_HEADER, DESC_COLUMN_WIDTH, START_BYTE_LABEL,
};
use crate::types::{Package, Row};

/// Encode the package as one concatenated uppercase hex string
///
/// Start byte, payload bytes in order, checksum byte; two zero-padded hex
/// characters per byte, no separators.
pub fn encode_flat(package: &Package) -> String {
    let mut out = String::with_capacity(package.total_len() * 2);
    out.push_str(&hex::encode_upper([package.start_byte]));
    out.push_str(&hex::encode_upper(&package.payload));
    out.push_str(&hex::encode_upper([package.checksum]));
    out
}

/// Encode the package as a grouped Markdown table
///
/// Every byte position gets a column headed by its zero-padded decimal
/// index; consecutive bytes with byte-for-byte identical descriptions share
/// one table row. Cell widths follow the formatting contract in
/// [`crate::constants`].
pub fn encode_markdown(package: &Package, rows: &[Row]) -> String {
    let pairs = labeled_bytes(package, rows);
    let groups = group_runs(&pairs);
    let width = cell_width(pairs.len());

    let mut lines = Vec::with_capacity(groups.len() + 2);
    lines.push(header_line(pairs.len(), width));
    lines.push(separator_line(pairs.len(), width));

    for group in &groups {
        lines.push(group_line(group, &pairs, width));
    }

    lines.join("\n")
}

/// One byte of the package with its owning description
struct LabeledByte {
    hex: String,
    description: String,
}

/// A run of consecutive bytes sharing one description
struct Group {
    start: usize,
    len: usize,
    description: String,
}

fn labeled_bytes(package: &Package, rows: &[Row]) -> Vec<LabeledByte> {
    let mut pairs = Vec::with_capacity(package.total_len());

    pairs.push(LabeledByte {
        hex: hex::encode_upper([package.start_byte]),
        description: START_BYTE_LABEL.to_string(),
    });

    for row in rows {
        // A blank description still needs a visible cell
        let description = if row.description.is_empty() {
            " ".to_string()
        } else {
            row.description.clone()
        };
        for byte in row.bytes() {
            pairs.push(LabeledByte {
                hex: hex::encode_upper([byte]),
                description: description.clone(),
            });
        }
    }

    pairs.push(LabeledByte {
        hex: hex::encode_upper([package.checksum]),
        description: CHECKSUM_LABEL.to_string(),
    });

    pairs
}

fn group_runs(pairs: &[LabeledByte]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for (i, pair) in pairs.iter().enumerate() {
        match groups.last_mut() {
            // Exact comparison: descriptions differing only by whitespace
            // start a new run
            Some(group) if group.description == pair.description => group.len += 1,
            _ => groups.push(Group {
                start: i,
                len: 1,
                description: pair.description.clone(),
            }),
        }
    }

    groups
}

// A byte cell is normally two characters (hex pair, zero-padded decimal
// index). Past 100 positions the index needs a third digit, so every cell
// widens uniformly to keep the columns aligned.
fn cell_width(positions: usize) -> usize {
    let index_digits = match positions {
        0 | 1 => 1,
        n => (n - 1).to_string().len(),
    };
    index_digits.max(BYTE_CELL_WIDTH)
}

fn header_line(positions: usize, width: usize) -> String {
    let mut cells = Vec::with_capacity(positions + 2);
    cells.push(" ".repeat(width));
    for i in 0..positions {
        cells.push(format!("{:0width$}", i, width = width));
    }
    cells.push(format!(
        "{:<width$}",
        DESC_COLUMN_HEADER,
        width = DESC_COLUMN_WIDTH
    ));
    render_line(&cells)
}

fn separator_line(positions: usize, width: usize) -> String {
    let mut cells = Vec::with_capacity(positions + 2);
    for _ in 0..=positions {
        cells.push("-".repeat(width));
    }
    cells.push("-".repeat(DESC_COLUMN_WIDTH));
    render_line(&cells)
}

fn group_line(group: &Group, pairs: &[LabeledByte], width: usize) -> String {
    let mut cells = Vec::with_capacity(pairs.len() + 2);
    cells.push(" ".repeat(width));
    for (i, pair) in pairs.iter().enumerate() {
        if i >= group.start && i < group.start + group.len {
            cells.push(format!("{:<width$}", pair.hex, width = width));
        } else {
            cells.push(" ".repeat(width));
        }
    }
    cells.push(format!(
        "{:<width$}",
        group.description,
        width = DESC_COLUMN_WIDTH
    ));
    render_line(&cells)
}

fn render_line(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
