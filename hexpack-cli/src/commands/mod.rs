//! CLI commands, one module per user-facing operation group
//!
//! Each command plays one dispatch of the host event loop: load the stored
//! session into an assembler, apply the edit, persist the session
//! best-effort.

pub mod export;
pub mod preset;
pub mod row;
pub mod show;

use hexpack_core::assembler::PackageAssembler;
use hexpack_core::store::{ConfigStore, StoredConfig};

/// Load the stored session into a fresh assembler
pub(crate) fn load_session(config_path: &str) -> (ConfigStore, StoredConfig, PackageAssembler) {
    let store = ConfigStore::new(config_path);
    let config = store.load();
    let assembler = PackageAssembler::from_records(config.last_session.clone());
    (store, config, assembler)
}

/// Write the assembler's rows back as the session, best-effort
pub(crate) fn persist_session(
    store: &ConfigStore,
    config: &mut StoredConfig,
    assembler: &PackageAssembler,
) {
    config.last_session = assembler.records();
    store.save_best_effort(config);
}
