//! Normalization of raw text input into valid hex digit strings
//!
//! Free-typed text goes through two passes: keyboard-layout substitution for
//! the Cyrillic letters on the A-F key positions, then a filter that keeps
//! only ASCII hex digits, uppercased. Input is never rejected; an odd number
//! of surviving digits marks the value as incomplete.

use crate::constants::KEYBOARD_SUBSTITUTIONS;

/// Result of normalizing one raw text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Hex-only, uppercase text
    pub text: String,
    /// True iff `text` has odd length (trailing incomplete byte)
    pub invalid: bool,
}

/// Normalize arbitrary text into an uppercase hex digit string
///
/// Substitution runs before filtering, so a Cyrillic letter on a hex key
/// position survives while any other non-hex character is dropped.
pub fn normalize(raw: &str) -> Normalized {
    let mut text = String::with_capacity(raw.len());

    for ch in raw.chars() {
        let ch = substitute(ch);
        if ch.is_ascii_hexdigit() {
            text.push(ch.to_ascii_uppercase());
        }
    }

    let invalid = text.len() % 2 != 0;
    Normalized { text, invalid }
}

/// Clamp a cursor/selection offset into the bounds of a normalized value
///
/// Normalization can only shrink the text, so a host that replaces the
/// displayed value must clamp any retained selection offsets to `[0, len]`.
pub fn clamp_selection(offset: usize, len: usize) -> usize {
    offset.min(len)
}

fn substitute(ch: char) -> char {
    for &(from, to) in KEYBOARD_SUBSTITUTIONS.iter() {
        if ch == from {
            return to;
        }
    }
    ch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex_passes_through_uppercased() {
        let n = normalize("a1b2");
        assert_eq!(n.text, "A1B2");
        assert!(!n.invalid);
    }

    #[test]
    fn test_non_hex_characters_stripped() {
        let n = normalize("0x12 34-5G!");
        assert_eq!(n.text, "123450");
        assert!(!n.invalid);
    }

    #[test]
    fn test_odd_length_flags_invalid() {
        let n = normalize("ABC");
        assert_eq!(n.text, "ABC");
        assert!(n.invalid);
    }

    #[test]
    fn test_cyrillic_layout_substitution() {
        // ф sits on the Latin A key, so "фF" cleans to "AF"
        let n = normalize("фF");
        assert_eq!(n.text, "AF");
        assert!(!n.invalid);
    }

    #[test]
    fn test_all_layout_substitutions_both_cases() {
        let n = normalize("ФфИиСсВвУуАа");
        assert_eq!(n.text, "AABBCCDDEEFF");
        assert!(!n.invalid);
    }

    #[test]
    fn test_empty_input() {
        let n = normalize("");
        assert_eq!(n.text, "");
        assert!(!n.invalid);
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(10, 4), 4);
        assert_eq!(clamp_selection(2, 4), 2);
        assert_eq!(clamp_selection(0, 0), 0);
    }
}
