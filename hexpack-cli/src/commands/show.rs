use anyhow::Result;
use colored::*;

use super::load_session;

pub fn execute(config_path: &str) -> Result<()> {
    let (_store, config, assembler) = load_session(config_path);

    println!("=== Rows ===");
    if assembler.rows().is_empty() {
        println!("(no rows)");
    }
    for (i, row) in assembler.rows().iter().enumerate() {
        let marker = if row.invalid {
            "incomplete".red().to_string()
        } else {
            "ok".green().to_string()
        };
        println!(
            "{:>3}  {:<16} [{}]  {}",
            i,
            if row.value.is_empty() {
                "-"
            } else {
                row.value.as_str()
            },
            marker,
            row.description
        );
    }

    let pkg = assembler.package();
    println!("\n=== Package ===");
    println!("Start byte:   {}", hex::encode_upper([pkg.start_byte]));
    println!(
        "Payload:      {} ({} bytes)",
        if pkg.payload.is_empty() {
            "-".to_string()
        } else {
            hex::encode_upper(&pkg.payload)
        },
        pkg.payload.len()
    );
    println!("Checksum:     {}", hex::encode_upper([pkg.checksum]));

    if let Some(name) = &config.last_selected_preset {
        println!("Preset:       {}", name);
    }

    Ok(())
}
