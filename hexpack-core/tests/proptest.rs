//! Property-based tests using proptest

use hexpack_core::{
    assembler::PackageAssembler,
    checksum::crc8,
    export::{encode_flat, encode_markdown},
    normalize::normalize,
    types::RowRecord,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_normalize_even_hex_is_identity_up_to_case(
        s in "[0-9a-fA-F]{0,64}"
    ) {
        let n = normalize(&s);
        prop_assert_eq!(n.text, s.to_uppercase());
        prop_assert_eq!(n.invalid, s.len() % 2 != 0);
    }

    #[test]
    fn prop_normalize_is_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        let twice = normalize(&once.text);
        prop_assert_eq!(&once.text, &twice.text);
        prop_assert_eq!(once.invalid, twice.invalid);
    }

    #[test]
    fn prop_normalize_output_is_uppercase_hex(s in any::<String>()) {
        let n = normalize(&s);
        prop_assert!(n.text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn prop_crc8_deterministic(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(crc8(&data), crc8(&data));
    }

    #[test]
    fn prop_flat_export_shape(
        values in prop::collection::vec("[0-9A-F]{0,8}", 0..16)
    ) {
        let records = values
            .into_iter()
            .map(|value| RowRecord { value, description: String::new() })
            .collect();
        let asm = PackageAssembler::from_records(records);
        let pkg = asm.package();
        let flat = encode_flat(&pkg);

        // Two characters per byte: start + payload + checksum
        prop_assert_eq!(flat.len(), (pkg.payload.len() + 2) * 2);
        prop_assert!(flat.starts_with("AA"));
        prop_assert!(flat.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn prop_checksum_is_pure_function_of_payload(
        values in prop::collection::vec("[0-9A-F]{0,8}", 0..16),
        descriptions in prop::collection::vec(any::<String>(), 0..16)
    ) {
        // Descriptions never influence the derived bytes
        let mut asm = PackageAssembler::from_records(
            values
                .iter()
                .map(|value| RowRecord { value: value.clone(), description: String::new() })
                .collect(),
        );
        let before = asm.package();

        for (i, d) in descriptions.iter().enumerate().take(asm.rows().len()) {
            asm.update_row_description(i, d);
        }
        let after = asm.package();

        prop_assert_eq!(before.payload, after.payload);
        prop_assert_eq!(before.checksum, after.checksum);
    }

    #[test]
    fn prop_assemble_and_export_never_panic(
        raws in prop::collection::vec(any::<String>(), 0..16)
    ) {
        let mut asm = PackageAssembler::new();
        for raw in &raws {
            asm.add_row();
            let index = asm.rows().len() - 1;
            asm.update_row_value(index, raw);
        }
        let pkg = asm.package();
        let _ = encode_flat(&pkg);
        let _ = encode_markdown(&pkg, asm.rows());
    }

    #[test]
    fn prop_replace_round_trip_normalizes(
        records in prop::collection::vec(
            (any::<String>(), any::<String>()).prop_map(|(value, description)| RowRecord {
                value,
                description,
            }),
            0..16
        )
    ) {
        let mut asm = PackageAssembler::new();
        asm.replace_all_rows(records.clone());

        for (row, original) in asm.rows().iter().zip(&records) {
            let n = normalize(&original.value);
            prop_assert_eq!(&row.value, &n.text);
            prop_assert_eq!(row.invalid, n.invalid);
            prop_assert_eq!(&row.description, &original.description);
        }
    }
}
