//! YAML settings file
//!
//! Lets an operator change global switches and per-component declarations
//! without recompiling. Looked up at `~/.config/sl4f/config.yaml` by default:
//!
//! ```yaml
//! settings:
//!   debug: true
//!   crash_files: true
//!   caller_tracking: false
//!   crash_dir: /var/log/myapp/crash
//! components:
//!   Scheduler:
//!     level: WARN
//!     verbose: false
//!   db:
//!     generate_critical_file: true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::component::ComponentConfig;
use super::context::{GlobalSettings, LoggingContext};
use super::metadata::ComponentOverride;
use super::traits::{ConfigError, ConfigResult, Loggable};

/// Contents of a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Global switches
    #[serde(default)]
    pub settings: GlobalSettings,

    /// Overrides keyed by display name or type name
    #[serde(default)]
    pub components: BTreeMap<String, ComponentOverride>,
}

impl SettingsFile {
    /// Default location (`<config dir>/sl4f/config.yaml`)
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("sl4f").join("config.yaml")
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load from [`SettingsFile::default_path`]
    pub fn load_default() -> ConfigResult<Self> {
        Self::load(Self::default_path())
    }

    pub fn parse(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Other(format!("Failed to serialize YAML: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Override for a component, matched by display name first, then type name
    pub fn override_for(&self, display_name: &str, type_name: &str) -> Option<&ComponentOverride> {
        self.components
            .get(display_name)
            .or_else(|| self.components.get(type_name))
    }

    /// Resolve a component's configuration with this file's override applied
    pub fn resolve<T: Loggable>(&self) -> ComponentConfig {
        let declared = T::log_metadata();
        let type_name = T::log_type_name();
        let display_name = declared
            .alias
            .as_deref()
            .filter(|alias| !alias.is_empty())
            .unwrap_or(type_name);

        match self.override_for(display_name, type_name) {
            Some(over) => ComponentConfig::resolve(type_name, &declared.merged(over)),
            None => ComponentConfig::resolve(type_name, &declared),
        }
    }

    /// Fresh context holding this file's global switches
    pub fn context(&self) -> LoggingContext {
        LoggingContext::from_settings(&self.settings)
    }
}
