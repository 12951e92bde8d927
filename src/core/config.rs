use crate::core::dataset::DEFAULT_METRIC_COLUMN;
use crate::core::inputs::AuxiliaryInputs;
use crate::core::profiles::Profile;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_metric_column() -> String {
    DEFAULT_METRIC_COLUMN.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_metric_column")]
    pub metric_column: String,
    #[serde(default)]
    pub default_profile: Option<Profile>,
    #[serde(default)]
    pub inputs: HashMap<Profile, AuxiliaryInputs>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            metric_column: default_metric_column(),
            default_profile: None,
            inputs: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "kpiboard", "kpiboard")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Default inputs configured for `profile`.
    pub fn inputs_for(&self, profile: Profile) -> AuxiliaryInputs {
        self.inputs.get(&profile).cloned().unwrap_or_default()
    }
}
