//! SL4F Core
//!
//! Per-component console logging. Each component declares its logging
//! behavior once (display name, minimum level, exception verbosity, debug
//! participation, crash dumps) and gets a [`Logger`] that applies it.
//!
//! ```rust
//! use std::sync::Arc;
//! use sl4f_core::{Loggable, LevelInfo, LogLevel, Logger, LoggingContext, MemorySink};
//!
//! struct Cache;
//!
//! impl Loggable for Cache {
//!     fn log_info() -> Option<LevelInfo> {
//!         Some(LevelInfo::new(LogLevel::Warn, false))
//!     }
//! }
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Cache::logger()
//!     .with_context(Arc::new(LoggingContext::new()))
//!     .with_sink(sink.clone());
//!
//! logger.info("filtered out");
//! logger.warn("eviction storm");
//! assert_eq!(sink.lines().len(), 1);
//! ```
//!
//! ## Fatal errors
//!
//! - [`Logger::critical`] logs a CRITICAL line and exits the process.
//! - [`Logger::critical_error`] logs a CRITICAL line, writes a crash dump when
//!   the component and the context allow it, and returns the error so the
//!   caller decides what happens next.

pub mod level;
pub mod color;
pub mod exception;
pub mod format;
pub mod caller;
pub mod crash;
pub mod exit;
pub mod config;
pub mod logging;
pub mod bridge;

// Re-export commonly used types
pub use level::LogLevel;

pub use exception::ExceptionDetails;

pub use config::{
    Loggable, ComponentMetadata, ComponentOverride, LevelInfo,
    ComponentConfig, LoggingContext, GlobalSettings, SettingsFile,
    ConfigError, ConfigResult,
};

pub use logging::{
    Logger, LogSink, SharedSink,
    ConsoleSink, FileSink, MemorySink, NoOpSink,
};

pub use crash::{CrashDumpWriter, CrashDumpError, CrashDumpResult};

pub use exit::{ProcessExit, StdProcessExit, RecordingExit, ExitRequested, CRITICAL_EXIT_CODE};

pub use caller::CallSite;

pub use bridge::LogBridge;
