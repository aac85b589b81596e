//! Logging configuration
//!
//! - `Loggable` / `ComponentMetadata`: what a component declares
//! - `ComponentConfig`: the resolved, immutable per-component configuration
//! - `LoggingContext`: process-wide switches (debug, crash files, caller tracking)
//! - `SettingsFile`: YAML file with global switches and per-component overrides

mod traits;
mod metadata;
mod component;
mod context;
mod file;

pub use traits::{Loggable, ConfigError, ConfigResult};
pub use metadata::{ComponentMetadata, ComponentOverride, LevelInfo, short_type_name};
pub use component::ComponentConfig;
pub use context::{
    GlobalSettings, LoggingContext,
    ENV_DEBUG, ENV_CRASH_FILES, ENV_CALLER_TRACKING, ENV_CRASH_DIR,
};
pub use file::SettingsFile;
