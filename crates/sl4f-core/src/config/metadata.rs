//! Per-component logging declarations

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Minimum level paired with exception verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_verbose() -> bool {
    true
}

impl LevelInfo {
    pub fn new(level: LogLevel, verbose: bool) -> Self {
        Self { level, verbose }
    }
}

impl Default for LevelInfo {
    fn default() -> Self {
        Self::new(LogLevel::Info, true)
    }
}

/// Declared metadata for one component, before resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub alias: Option<String>,
    pub level_info: Option<LevelInfo>,
    pub not_debug_log: bool,
    pub generate_critical_file: bool,
}

impl ComponentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_level(mut self, level: LogLevel, verbose: bool) -> Self {
        self.level_info = Some(LevelInfo::new(level, verbose));
        self
    }

    pub fn with_not_debug_log(mut self) -> Self {
        self.not_debug_log = true;
        self
    }

    pub fn with_critical_file(mut self) -> Self {
        self.generate_critical_file = true;
        self
    }

    /// Apply a settings-file override; fields it leaves unset are kept
    pub fn merged(&self, over: &ComponentOverride) -> Self {
        let base = self.level_info.unwrap_or_default();
        let level_info = if over.level.is_some() || over.verbose.is_some() {
            Some(LevelInfo::new(
                over.level.unwrap_or(base.level),
                over.verbose.unwrap_or(base.verbose),
            ))
        } else {
            self.level_info
        };

        Self {
            alias: over.alias.clone().or_else(|| self.alias.clone()),
            level_info,
            not_debug_log: over.not_debug_log.unwrap_or(self.not_debug_log),
            generate_critical_file: over
                .generate_critical_file
                .unwrap_or(self.generate_critical_file),
        }
    }
}

/// Component entry of the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_debug_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_critical_file: Option<bool>,
}

/// Type name without module path or generic arguments
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
