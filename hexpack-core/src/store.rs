//! Session and preset persistence to a JSON document
//!
//! One file holds the last working session, the last-selected preset name,
//! and the named presets. Reads are tolerant: a missing or corrupt file
//! degrades to defaults with a warning. Writes after a mutation are
//! best-effort; a failed save loses at most the most recent edit.

use crate::error::PackError;
use crate::types::RowRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The whole persisted configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredConfig {
    /// Rows of the last working session
    #[serde(rename = "__last_session__", default)]
    pub last_session: Vec<RowRecord>,

    /// Name of the preset selected when the session was saved
    #[serde(default)]
    pub last_selected_preset: Option<String>,

    /// Named presets, each a full row list
    #[serde(default)]
    pub presets: BTreeMap<String, Vec<RowRecord>>,
}

impl StoredConfig {
    /// Store `rows` under `name`, silently overwriting an existing preset
    pub fn save_preset(&mut self, name: &str, rows: Vec<RowRecord>) {
        self.presets.insert(name.to_string(), rows);
    }

    /// Rows of the preset named `name`, if present
    pub fn preset(&self, name: &str) -> Option<&Vec<RowRecord>> {
        self.presets.get(name)
    }

    /// Remove the preset named `name`; returns whether it existed
    pub fn delete_preset(&mut self, name: &str) -> bool {
        let existed = self.presets.remove(name).is_some();
        if self.last_selected_preset.as_deref() == Some(name) {
            self.last_selected_preset = None;
        }
        existed
    }

    /// Preset names in stored (sorted) order
    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }
}

/// File-backed store for the configuration document
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store over the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults
    ///
    /// A missing file is normal on first run; a corrupt file is logged and
    /// treated as empty. Neither case is surfaced as an error.
    pub fn load(&self) -> StoredConfig {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no stored config, starting empty");
                return StoredConfig::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "stored config corrupt, starting empty");
                StoredConfig::default()
            }
        }
    }

    /// Write the configuration as pretty JSON (2-space indentation)
    pub fn save(&self, config: &StoredConfig) -> Result<(), PackError> {
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Best-effort save: failures are logged, never propagated
    pub fn save_best_effort(&self, config: &StoredConfig) {
        if let Err(err) = self.save(config) {
            warn!(path = %self.path.display(), %err, "failed to persist config");
        }
    }
}
