use anyhow::{bail, Result};
use hexpack_core::assembler::PackageAssembler;
use tracing::info;

use super::{load_session, persist_session};

pub fn save(config_path: &str, name: &str) -> Result<()> {
    let (store, mut config, assembler) = load_session(config_path);

    // Silent overwrite by design: no distinct error for an existing name
    config.save_preset(name, assembler.records());
    config.last_selected_preset = Some(name.to_string());
    store.save_best_effort(&config);

    info!("Saved preset {:?} ({} rows)", name, assembler.rows().len());
    Ok(())
}

pub fn load(config_path: &str, name: &str) -> Result<()> {
    let (store, mut config, _assembler) = load_session(config_path);

    let Some(records) = config.preset(name).cloned() else {
        bail!("no preset named {:?}", name);
    };

    let assembler = PackageAssembler::from_records(records);
    config.last_selected_preset = Some(name.to_string());
    persist_session(&store, &mut config, &assembler);

    info!(
        "Loaded preset {:?} ({} rows, checksum {:02X})",
        name,
        assembler.rows().len(),
        assembler.checksum()
    );
    Ok(())
}

pub fn delete(config_path: &str, name: &str) -> Result<()> {
    let (store, mut config, _assembler) = load_session(config_path);

    if !config.delete_preset(name) {
        bail!("no preset named {:?}", name);
    }
    store.save_best_effort(&config);

    info!("Deleted preset {:?}", name);
    Ok(())
}

pub fn list(config_path: &str) -> Result<()> {
    let (_store, config, _assembler) = load_session(config_path);

    if config.presets.is_empty() {
        println!("(no presets)");
        return Ok(());
    }

    for name in config.preset_names() {
        let rows = config.preset(name).map_or(0, Vec::len);
        let selected = if config.last_selected_preset.as_deref() == Some(name) {
            " *"
        } else {
            ""
        };
        println!("{} ({} rows){}", name, rows, selected);
    }

    Ok(())
}
