//! Fuzzing placeholder for hexpack-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_normalize

pub fn fuzz_normalize(data: &[u8]) {
    use hexpack_core::normalize::normalize;

    // Normalization accepts arbitrary text - should never panic
    let text = String::from_utf8_lossy(data);
    let _ = normalize(&text);
}

pub fn fuzz_assemble(data: &[u8]) {
    use hexpack_core::assembler::PackageAssembler;
    use hexpack_core::export::{encode_flat, encode_markdown};

    // Feed arbitrary chunks through the full edit/export path
    let mut assembler = PackageAssembler::new();
    for chunk in data.chunks(8) {
        assembler.add_row();
        let index = assembler.rows().len() - 1;
        assembler.update_row_value(index, &String::from_utf8_lossy(chunk));
    }

    let package = assembler.package();
    let _ = encode_flat(&package);
    let _ = encode_markdown(&package, assembler.rows());
}
