//! Declarative logging metadata trait

use super::metadata::{short_type_name, ComponentMetadata, LevelInfo};
use crate::logging::Logger;

/// Static logging metadata declared by a component type
///
/// Every method has a default, so `impl Loggable for MyType {}` yields a
/// logger named `MyType` at `INFO` with verbose exceptions, taking part in
/// debug output and never writing crash dumps. Override only what differs.
///
/// # Example
///
/// ```
/// use sl4f_core::{Loggable, LevelInfo, LogLevel};
///
/// struct Scheduler;
///
/// impl Loggable for Scheduler {
///     fn log_alias() -> Option<&'static str> {
///         Some("sched")
///     }
///
///     fn log_info() -> Option<LevelInfo> {
///         Some(LevelInfo::new(LogLevel::Warn, false))
///     }
///
///     fn generate_critical_file() -> bool {
///         true
///     }
/// }
///
/// let logger = Scheduler::logger();
/// assert_eq!(logger.config().display_name(), "sched");
/// assert_eq!(logger.level(), LogLevel::Warn);
/// ```
pub trait Loggable: 'static {
    /// Name shown in log lines instead of the type name
    fn log_alias() -> Option<&'static str> {
        None
    }

    /// Minimum level and exception verbosity
    fn log_info() -> Option<LevelInfo> {
        None
    }

    /// Keep INFO/TRACE/WARN output of this component out of debug mode
    fn not_debug_log() -> bool {
        false
    }

    /// Write a crash dump when a critical error with a cause is logged
    fn generate_critical_file() -> bool {
        false
    }

    /// Unqualified type name used when no alias is declared
    fn log_type_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// All declarations gathered into one value
    fn log_metadata() -> ComponentMetadata {
        ComponentMetadata {
            alias: Self::log_alias().map(str::to_string),
            level_info: Self::log_info(),
            not_debug_log: Self::not_debug_log(),
            generate_critical_file: Self::generate_critical_file(),
        }
    }

    /// Logger for this component bound to the process-wide context
    fn logger() -> Logger
    where
        Self: Sized,
    {
        Logger::for_type::<Self>()
    }
}

/// Errors that can occur while loading logging configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
