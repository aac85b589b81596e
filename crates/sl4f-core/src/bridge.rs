//! Adapter from the `log` facade
//!
//! Hosts and dependencies that log through `log::info!` and friends can be
//! routed into a [`Logger`], so their records go through the same gate and
//! line layout as the host's own components. With caller tracking on, the
//! suffix names the record's own file and line, not the bridge.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::caller::CallSite;
use crate::level::LogLevel;
use crate::logging::Logger;

/// `log::Log` implementation backed by a [`Logger`]
#[derive(Debug)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Install as the process-wide `log` logger
    ///
    /// Fails if another `log` logger was installed first.
    pub fn install(logger: Logger) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// `log` has no CRITICAL and no equivalent of our TRACE/INFO order;
    /// both of its verbose levels map to TRACE.
    pub fn map_level(level: Level) -> LogLevel {
        match level {
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warn,
            Level::Info => LogLevel::Info,
            Level::Debug | Level::Trace => LogLevel::Trace,
        }
    }

    /// Where the record was made, if the front end said
    pub fn record_site(record: &Record) -> Option<CallSite> {
        let line = record.line()?;
        match record.file_static() {
            Some(file) => Some(CallSite::new(file, line, 0)),
            None => record
                .file()
                .map(|file| CallSite::new(file.to_string(), line, 0)),
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.is_enabled(Self::map_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger.log_at(
            Self::map_level(record.level()),
            record.args(),
            Self::record_site(record),
        );
    }

    fn flush(&self) {}
}
