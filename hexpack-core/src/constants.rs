//! Constants for the hexpack package format and export rendering

/// Fixed first byte of every assembled package
pub const START_BYTE: u8 = 0xAA;

/// CRC-8 generator polynomial (MSB-first, initial value 0x00, no final XOR)
pub const CRC8_POLY: u8 = 0x07;

/// Description attached to the start byte in the Markdown export
pub const START_BYTE_LABEL: &str = "start byte";

/// Description attached to the checksum byte in the Markdown export
pub const CHECKSUM_LABEL: &str = "checksum";

/// Minimum width of a byte cell in the Markdown table: two hex characters,
/// also the width of the zero-padded decimal position index in the header
/// row. Packages of 100+ positions widen every byte cell uniformly so a
/// three-digit index keeps the columns aligned.
pub const BYTE_CELL_WIDTH: usize = 2;

/// Width of the description column in the Markdown table. Part of the export
/// formatting contract; golden-output tests depend on it.
pub const DESC_COLUMN_WIDTH: usize = 24;

/// Header text of the description column
pub const DESC_COLUMN_HEADER: &str = "Description";

/// Substitutions applied before hex filtering, both cases of the six Cyrillic
/// letters sitting on the A-F key positions of the ЙЦУКЕН layout. A user
/// typing hex with the Russian layout active produces these instead of the
/// Latin letters, so they map by key position, not by visual similarity.
pub const KEYBOARD_SUBSTITUTIONS: [(char, char); 12] = [
    ('Ф', 'A'),
    ('ф', 'A'),
    ('И', 'B'),
    ('и', 'B'),
    ('С', 'C'),
    ('с', 'C'),
    ('В', 'D'),
    ('в', 'D'),
    ('У', 'E'),
    ('у', 'E'),
    ('А', 'F'),
    ('а', 'F'),
];
