use anyhow::{Context, Result};
use hexpack_core::export::{encode_flat, encode_markdown};
use std::io::Write;

use super::load_session;

pub fn flat(config_path: &str) -> Result<()> {
    let (_store, _config, assembler) = load_session(config_path);
    let encoded = encode_flat(&assembler.package());
    write_all(&encoded)
}

pub fn markdown(config_path: &str) -> Result<()> {
    let (_store, _config, assembler) = load_session(config_path);
    let encoded = encode_markdown(&assembler.package(), assembler.rows());
    write_all(&encoded)
}

// The full encoding goes out in one write; a failure leaves nothing
// half-written and surfaces as a single generic error.
fn write_all(encoded: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", encoded).context("copy failed")?;
    Ok(())
}
