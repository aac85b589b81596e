//! Severity levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color;
use crate::config::ConfigError;

/// Severity of a log message, declared from most to least severe.
///
/// The declaration order is the ranking: `Critical` has rank 0 and `Info`
/// has rank 4. A message passes a component's threshold when its rank is
/// less than or equal to the threshold's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Critical,
    Error,
    Warn,
    Trace,
    Info,
}

impl LogLevel {
    /// All levels in rank order
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Trace,
        LogLevel::Info,
    ];

    /// Position in the fixed ordering (0 = most severe)
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Whether a message at `incoming` passes a threshold of `self`
    pub fn should_emit(self, incoming: LogLevel) -> bool {
        incoming.rank() <= self.rank()
    }

    /// Upper-case label printed in log lines
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
        }
    }

    /// ANSI color used for the label
    pub fn color(self) -> &'static str {
        match self {
            LogLevel::Critical => color::CRITICAL,
            LogLevel::Error => color::ERROR,
            LogLevel::Warn => color::WARN,
            LogLevel::Trace => color::TRACE,
            LogLevel::Info => color::INFO,
        }
    }

    /// Levels that always reach the operator, regardless of debug mode
    pub fn bypasses_debug_gate(self) -> bool {
        matches!(self, LogLevel::Critical | LogLevel::Error)
    }

    /// Width of the longest label across the whole scale
    pub fn max_label_width() -> usize {
        Self::ALL.iter().map(|l| l.label().len()).max().unwrap_or(0)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Ok(LogLevel::Critical),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "TRACE" => Ok(LogLevel::Trace),
            "INFO" => Ok(LogLevel::Info),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}
