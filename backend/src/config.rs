//! Planner configuration file support.
//!
//! Reads `planner.toml` for the input file locations. Every field has a
//! default, so the binary runs without any configuration file present.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors loading the planner configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no planner.toml found in standard locations")]
    NotFound,
}

/// Planner configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub files: FileSettings,
}

/// Input file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    /// Room inventory CSV.
    #[serde(default = "default_inventory_path")]
    pub inventory: PathBuf,
    /// Reservation ledger CSV.
    #[serde(default = "default_ledger_path")]
    pub ledger: PathBuf,
    /// Report filename stem used when the output prompt is left empty.
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            inventory: default_inventory_path(),
            ledger: default_ledger_path(),
            output_stem: default_output_stem(),
        }
    }
}

fn default_inventory_path() -> PathBuf {
    PathBuf::from("rooms_list.csv")
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("reserved_rooms.csv")
}

fn default_output_stem() -> String {
    "schedule".to_string()
}

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default locations, in order:
    /// `planner.toml` in the current directory, in `backend/`, then in the
    /// parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("planner.toml"),
            PathBuf::from("backend/planner.toml"),
            PathBuf::from("../planner.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Err(ConfigError::NotFound)
    }
}
