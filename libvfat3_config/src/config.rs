use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::constants::{DEFAULT_TEMPLATE_NAME, DEFAULT_VFAT3_DIR};
use super::error::ConfigError;

/// Structure representing the on-disk layout of the VFAT3 configuration tree.
/// Configs are serializable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vfat3_dir: PathBuf,
    pub template_name: String,
}

impl Default for Config {
    /// The production layout on the CTP7 persistent filesystem
    fn default() -> Self {
        Self {
            vfat3_dir: PathBuf::from(DEFAULT_VFAT3_DIR),
            template_name: String::from(DEFAULT_TEMPLATE_NAME),
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Get the path to the master template file, checking that it exists
    pub fn template_path(&self) -> Result<PathBuf, ConfigError> {
        let template = self.vfat3_dir.join(&self.template_name);
        if template.exists() {
            Ok(template)
        } else {
            Err(ConfigError::BadFilePath(template))
        }
    }

    /// Path of the calibration file backing a given board/slot
    pub fn calibration_file(&self, oh: &str, vfat: i32) -> PathBuf {
        self.vfat3_dir
            .join(format!("config_OH{oh}_VFAT{vfat}_cal.txt"))
    }

    /// Path of the active configuration filename for a given board/slot.
    /// After the link setter has run, this is a symlink to the calibration file.
    pub fn active_config_file(&self, oh: &str, vfat: i32) -> PathBuf {
        self.vfat3_dir.join(format!("config_OH{oh}_VFAT{vfat}.txt"))
    }
}
