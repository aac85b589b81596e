//! Process-wide logging switches
//!
//! Every [`Logger`](crate::Logger) holds an `Arc<LoggingContext>` and reads
//! its flags on each call. Production code shares [`LoggingContext::global`];
//! tests build their own context so they never touch process state.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub const ENV_DEBUG: &str = "SL4F_DEBUG";
pub const ENV_CRASH_FILES: &str = "SL4F_CRASH_FILES";
pub const ENV_CALLER_TRACKING: &str = "SL4F_CALLER_TRACKING";
pub const ENV_CRASH_DIR: &str = "SL4F_CRASH_DIR";

/// Plain-value form of the switches, as stored in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Debug mode: when off, INFO/TRACE/WARN are suppressed everywhere
    pub debug: bool,
    /// Allow components that ask for crash dumps to write them
    pub crash_files: bool,
    /// Append the logging call site to every line
    pub caller_tracking: bool,
    /// Directory crash dumps are written to (working directory if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crash_dir: Option<PathBuf>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            debug: true,
            crash_files: true,
            caller_tracking: false,
            crash_dir: None,
        }
    }
}

static GLOBAL: Lazy<Arc<LoggingContext>> = Lazy::new(|| Arc::new(LoggingContext::from_env()));

/// Shared, mutable logging switches
///
/// Flags are plain atomics read without ordering guarantees: changing them
/// while other threads log is allowed but racy, so treat them as set once at
/// startup.
#[derive(Debug)]
pub struct LoggingContext {
    debug_enabled: AtomicBool,
    crash_files_enabled: AtomicBool,
    caller_tracking_enabled: AtomicBool,
    crash_dir: RwLock<PathBuf>,
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingContext {
    /// Context with default switches (debug on, crash files on, no tracking)
    pub fn new() -> Self {
        Self::from_settings(&GlobalSettings::default())
    }

    pub fn from_settings(settings: &GlobalSettings) -> Self {
        let context = Self {
            debug_enabled: AtomicBool::new(true),
            crash_files_enabled: AtomicBool::new(true),
            caller_tracking_enabled: AtomicBool::new(false),
            crash_dir: RwLock::new(PathBuf::from(".")),
        };
        context.apply(settings);
        context
    }

    /// Defaults overridden by `SL4F_*` environment variables
    pub fn from_env() -> Self {
        let context = Self::new();
        context.apply_env_with(|key| std::env::var(key).ok());
        context
    }

    /// The process-wide context used by loggers built without an explicit one
    pub fn global() -> Arc<LoggingContext> {
        Arc::clone(&GLOBAL)
    }

    /// Overwrite every switch from `settings`
    pub fn apply(&self, settings: &GlobalSettings) {
        self.set_debug_enabled(settings.debug);
        self.set_crash_files_enabled(settings.crash_files);
        self.set_caller_tracking_enabled(settings.caller_tracking);
        self.set_crash_dir(settings.crash_dir.clone().unwrap_or_else(|| PathBuf::from(".")));
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// Unrecognized flag values are ignored.
    pub fn apply_env_with<F>(&self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(on) = lookup(ENV_DEBUG).as_deref().and_then(parse_flag) {
            self.set_debug_enabled(on);
        }
        if let Some(on) = lookup(ENV_CRASH_FILES).as_deref().and_then(parse_flag) {
            self.set_crash_files_enabled(on);
        }
        if let Some(on) = lookup(ENV_CALLER_TRACKING).as_deref().and_then(parse_flag) {
            self.set_caller_tracking_enabled(on);
        }
        if let Some(dir) = lookup(ENV_CRASH_DIR).filter(|d| !d.trim().is_empty()) {
            self.set_crash_dir(dir);
        }
    }

    /// Snapshot of the current switches
    pub fn settings(&self) -> GlobalSettings {
        GlobalSettings {
            debug: self.debug_enabled(),
            crash_files: self.crash_files_enabled(),
            caller_tracking: self.caller_tracking_enabled(),
            crash_dir: Some(self.crash_dir()),
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Relaxed)
    }

    pub fn set_debug_enabled(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn crash_files_enabled(&self) -> bool {
        self.crash_files_enabled.load(Ordering::Relaxed)
    }

    pub fn set_crash_files_enabled(&self, enabled: bool) {
        self.crash_files_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn caller_tracking_enabled(&self) -> bool {
        self.caller_tracking_enabled.load(Ordering::Relaxed)
    }

    pub fn set_caller_tracking_enabled(&self, enabled: bool) {
        self.caller_tracking_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn crash_dir(&self) -> PathBuf {
        self.crash_dir.read().clone()
    }

    pub fn set_crash_dir(&self, dir: impl AsRef<Path>) {
        *self.crash_dir.write() = dir.as_ref().to_path_buf();
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
