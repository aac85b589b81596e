//! Per-component logger: gating, formatting and the fatal paths

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

use chrono::Local;

use super::console::ConsoleSink;
use super::traits::SharedSink;
use crate::caller::CallSite;
use crate::config::{ComponentConfig, Loggable, LoggingContext};
use crate::crash::CrashDumpWriter;
use crate::exception::ExceptionDetails;
use crate::exit::{ProcessExit, StdProcessExit, CRITICAL_EXIT_CODE};
use crate::format::{format_exception, format_line, TIMESTAMP_FORMAT};
use crate::level::LogLevel;

/// Logger owned by one component
///
/// A message passes when its level is at least as severe as the component's
/// minimum level. INFO, TRACE and WARN must additionally pass the debug gate
/// (global debug mode on and the component not excluded from it); ERROR and
/// CRITICAL skip the debug gate so the operator always sees them.
///
/// There are two fatal entry points:
/// - [`Logger::critical`] logs and ends the process.
/// - [`Logger::critical_error`] logs, optionally writes a crash dump, and
///   hands the error back so the caller can propagate it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sl4f_core::{Loggable, Logger, LoggingContext, MemorySink};
///
/// struct Indexer;
/// impl Loggable for Indexer {}
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::for_type::<Indexer>()
///     .with_context(Arc::new(LoggingContext::new()))
///     .with_sink(sink.clone());
///
/// logger.info("indexing 42 files");
/// assert!(sink.lines()[0].ends_with("Indexer\u{1b}[0m: indexing 42 files"));
/// ```
#[derive(Clone)]
pub struct Logger {
    config: ComponentConfig,
    context: Arc<LoggingContext>,
    sink: SharedSink,
    exit: Arc<dyn ProcessExit>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger for an already resolved configuration, writing to the console
    /// and bound to the process-wide context
    pub fn new(config: ComponentConfig) -> Self {
        Self {
            config,
            context: LoggingContext::global(),
            sink: Arc::new(ConsoleSink::new()),
            exit: Arc::new(StdProcessExit),
        }
    }

    /// Logger for a [`Loggable`] type
    pub fn for_type<T: Loggable>() -> Self {
        Self::new(ComponentConfig::for_type::<T>())
    }

    /// Use an explicit context instead of the process-wide one
    pub fn with_context(mut self, context: Arc<LoggingContext>) -> Self {
        self.context = context;
        self
    }

    /// Write to a different sink
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the process termination primitive
    pub fn with_exit(mut self, exit: Arc<dyn ProcessExit>) -> Self {
        self.exit = exit;
        self
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    pub fn context(&self) -> &LoggingContext {
        &self.context
    }

    /// Configured minimum level
    pub fn level(&self) -> LogLevel {
        self.config.min_level()
    }

    /// Whether a message at `level` would currently be written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        if !self.config.min_level().should_emit(level) {
            return false;
        }
        level.bypasses_debug_gate() || self.config.participates_in_debug(&self.context)
    }

    #[track_caller]
    pub fn info(&self, target: impl Display) {
        self.emit(LogLevel::Info, &target.to_string(), None);
    }

    #[track_caller]
    pub fn trace(&self, target: impl Display) {
        self.emit(LogLevel::Trace, &target.to_string(), None);
    }

    #[track_caller]
    pub fn warn(&self, target: impl Display) {
        self.emit(LogLevel::Warn, &target.to_string(), None);
    }

    #[track_caller]
    pub fn error(&self, target: impl Display) {
        self.emit(LogLevel::Error, &target.to_string(), None);
    }

    /// ERROR line followed by an exception block on the error stream
    ///
    /// Boxed errors and other trait objects are passed by reborrowing,
    /// e.g. `logger.error_with("load failed", &*boxed)`. The stack is only
    /// walked when the line passes the gate and the component wants
    /// verbose exceptions.
    #[track_caller]
    pub fn error_with<E: Error + ?Sized + 'static>(&self, target: impl Display, error: &E) {
        if !self.is_enabled(LogLevel::Error) {
            return;
        }
        let details = if self.config.verbose_exceptions() {
            ExceptionDetails::capture(error)
        } else {
            ExceptionDetails::describe(error)
        };
        self.error_with_details(target, &details);
    }

    /// Like [`Logger::error_with`] for details captured earlier
    #[track_caller]
    pub fn error_with_details(&self, target: impl Display, details: &ExceptionDetails) {
        if !self.is_enabled(LogLevel::Error) {
            return;
        }
        self.emit(LogLevel::Error, &target.to_string(), None);
        self.sink
            .write_block(&format_exception(details, self.config.verbose_exceptions()));
    }

    /// Write a line at any level through the normal gate
    ///
    /// Unlike [`Logger::critical`], a `Critical` line written here does not
    /// end the process.
    #[track_caller]
    pub fn log(&self, level: LogLevel, target: impl Display) {
        self.emit(level, &target.to_string(), None);
    }

    /// Like [`Logger::log`], reporting `site` as the caller when tracking is on
    ///
    /// For front ends that already know where a record was made. With
    /// `None` the call site of this method is used.
    #[track_caller]
    pub fn log_at(&self, level: LogLevel, target: impl Display, site: Option<CallSite>) {
        self.emit(level, &target.to_string(), site);
    }

    /// Log a CRITICAL line and terminate the process
    #[track_caller]
    pub fn critical(&self, target: impl Display) -> ! {
        self.emit(LogLevel::Critical, &target.to_string(), None);
        self.sink.flush();
        self.exit.exit(CRITICAL_EXIT_CODE)
    }

    /// Log a CRITICAL line, write a crash dump if enabled, and return `error`
    /// for the caller to propagate
    ///
    /// The dump is written when the component asked for crash files and the
    /// context allows them. A failed dump is reported as an ERROR line and
    /// never replaces `error`. Use [`Logger::critical_error_boxed`] for
    /// `Box<dyn Error + Send + Sync>`.
    ///
    /// ```no_run
    /// # use sl4f_core::{Loggable, Logger};
    /// # struct Loader;
    /// # impl Loggable for Loader {}
    /// fn load(logger: &Logger, path: &str) -> std::io::Result<String> {
    ///     match std::fs::read_to_string(path) {
    ///         Ok(text) => Ok(text),
    ///         Err(e) => Err(logger.critical_error(format!("cannot read {}", path), e)),
    ///     }
    /// }
    /// ```
    #[must_use = "the returned error should be propagated"]
    #[track_caller]
    pub fn critical_error<E: Error + 'static>(&self, target: impl Display, error: E) -> E {
        self.fatal(&target.to_string(), &error);
        error
    }

    /// [`Logger::critical_error`] for boxed errors
    #[must_use = "the returned error should be propagated"]
    #[track_caller]
    pub fn critical_error_boxed(
        &self,
        target: impl Display,
        error: Box<dyn Error + Send + Sync>,
    ) -> Box<dyn Error + Send + Sync> {
        self.fatal(&target.to_string(), &*error);
        error
    }

    #[track_caller]
    fn fatal<E: Error + ?Sized + 'static>(&self, message: &str, error: &E) {
        self.emit(LogLevel::Critical, message, None);

        if self.config.dump_on_fatal() && self.context.crash_files_enabled() {
            let details = ExceptionDetails::capture(error);
            let writer = CrashDumpWriter::new(self.context.crash_dir());
            if let Err(dump_error) = writer.write_dump(&details, message) {
                self.error_with(
                    format!("{} (crash dump failed: {})", message, dump_error),
                    &dump_error,
                );
            }
        }
    }

    /// Write an empty line to the standard stream
    pub fn break_line(&self) {
        self.sink.write_line("");
    }

    #[track_caller]
    fn emit(&self, level: LogLevel, message: &str, site: Option<CallSite>) {
        if !self.is_enabled(level) {
            return;
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let mut line = format_line(&timestamp, level, self.config.display_name(), message);
        if self.context.caller_tracking_enabled() {
            let site = match site {
                Some(site) => site,
                None => CallSite::capture(),
            };
            line.push_str(&site.suffix(self.config.type_name()));
        }
        self.sink.write_line(&line);
    }
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(&format!($($arg)*))
    };
}
