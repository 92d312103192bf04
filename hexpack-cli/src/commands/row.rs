use anyhow::{bail, Result};
use tracing::info;

use super::{load_session, persist_session};

pub fn add(config_path: &str, value: Option<&str>, description: Option<&str>) -> Result<()> {
    let (store, mut config, mut assembler) = load_session(config_path);

    assembler.add_row();
    let index = assembler.rows().len() - 1;
    if let Some(value) = value {
        assembler.update_row_value(index, value);
    }
    if let Some(description) = description {
        assembler.update_row_description(index, description);
    }

    persist_session(&store, &mut config, &assembler);

    let row = &assembler.rows()[index];
    info!(
        "Added row {} (value {:?}, checksum {:02X})",
        index,
        row.value,
        assembler.checksum()
    );
    Ok(())
}

pub fn remove(config_path: &str, index: usize) -> Result<()> {
    let (store, mut config, mut assembler) = load_session(config_path);

    if index >= assembler.rows().len() {
        bail!(
            "row index {} out of range (session has {} rows)",
            index,
            assembler.rows().len()
        );
    }

    assembler.remove_row(index);
    persist_session(&store, &mut config, &assembler);

    info!(
        "Removed row {} ({} rows left, checksum {:02X})",
        index,
        assembler.rows().len(),
        assembler.checksum()
    );
    Ok(())
}

pub fn set(
    config_path: &str,
    index: usize,
    value: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let (store, mut config, mut assembler) = load_session(config_path);

    if index >= assembler.rows().len() {
        bail!(
            "row index {} out of range (session has {} rows)",
            index,
            assembler.rows().len()
        );
    }

    if let Some(value) = value {
        assembler.update_row_value(index, value);
    }
    if let Some(description) = description {
        assembler.update_row_description(index, description);
    }

    persist_session(&store, &mut config, &assembler);

    let row = &assembler.rows()[index];
    info!(
        "Updated row {} (value {:?}, invalid {}, checksum {:02X})",
        index,
        row.value,
        row.invalid,
        assembler.checksum()
    );
    Ok(())
}
