//! Build a small byte package and print both export encodings.
//!
//! Run with: cargo run --example build_package

use hexpack_core::{
    assembler::PackageAssembler,
    export::{encode_flat, encode_markdown},
};

fn main() {
    let mut asm = PackageAssembler::new();

    asm.add_row();
    asm.update_row_value(0, "10");
    asm.update_row_description(0, "command");

    asm.add_row();
    asm.update_row_value(1, "DEAD BEEF");
    asm.update_row_description(1, "address");

    asm.add_row();
    asm.update_row_value(2, "7"); // incomplete byte, flagged but kept visible
    asm.update_row_description(2, "trailing nibble");

    for (i, row) in asm.rows().iter().enumerate() {
        println!(
            "row {}: value={:<10} invalid={} description={}",
            i, row.value, row.invalid, row.description
        );
    }

    let pkg = asm.package();
    println!("\nflat export:\n{}", encode_flat(&pkg));
    println!("\nmarkdown export:\n{}", encode_markdown(&pkg, asm.rows()));
}
