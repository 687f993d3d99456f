//! Demo configuration, deserialized from TOML.
//!
//! Both fields are optional in the file; missing ones fall back to the
//! conventional names next to the working directory.
//!
//! ```toml
//! data_path = "finance_data.csv"
//! log_path = "steel_core_audit.jsonl"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use steelcore_contracts::{SteelError, SteelResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// The financial table CSV. Seeded with demo data when missing.
    pub data_path: PathBuf,
    /// The append-only audit log.
    pub log_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("finance_data.csv"),
            log_path: PathBuf::from("steel_core_audit.jsonl"),
        }
    }
}

impl DemoConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> SteelResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| SteelError::ConfigError {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&text).map_err(|e| SteelError::ConfigError {
            reason: format!("{}: {}", path.display(), e),
        })
    }

    /// The dataset name written into audit events' `source` field.
    pub fn source_name(&self) -> String {
        self.data_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.data_path.display().to_string())
    }
}
