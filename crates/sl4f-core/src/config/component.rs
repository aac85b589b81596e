//! Resolved per-component configuration

use super::context::LoggingContext;
use super::metadata::{ComponentMetadata, LevelInfo};
use super::traits::Loggable;
use crate::level::LogLevel;

/// Immutable configuration of one component's logger
///
/// Resolved once from the declared [`ComponentMetadata`]. Debug
/// participation is the only derived value that is not frozen: it combines
/// the component's own exclusion with the context's debug flag at the time
/// of each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    display_name: String,
    type_name: String,
    min_level: LogLevel,
    verbose_exceptions: bool,
    debug_excluded: bool,
    dump_on_fatal: bool,
}

impl ComponentConfig {
    /// Derive the configuration of a component named `type_name`
    pub fn resolve(type_name: &str, metadata: &ComponentMetadata) -> Self {
        let display_name = match metadata.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => type_name.to_string(),
        };
        let info = metadata.level_info.unwrap_or_else(LevelInfo::default);

        Self {
            display_name,
            type_name: type_name.to_string(),
            min_level: info.level,
            verbose_exceptions: info.verbose,
            debug_excluded: metadata.not_debug_log,
            dump_on_fatal: metadata.generate_critical_file,
        }
    }

    /// Derive the configuration from a type's [`Loggable`] declarations
    pub fn for_type<T: Loggable>() -> Self {
        Self::resolve(T::log_type_name(), &T::log_metadata())
    }

    /// Name printed in log lines
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Owning type's name, used by the caller-tracking suffix
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn verbose_exceptions(&self) -> bool {
        self.verbose_exceptions
    }

    pub fn debug_excluded(&self) -> bool {
        self.debug_excluded
    }

    pub fn dump_on_fatal(&self) -> bool {
        self.dump_on_fatal
    }

    /// Whether INFO/TRACE/WARN output is currently allowed
    pub fn participates_in_debug(&self, context: &LoggingContext) -> bool {
        !self.debug_excluded && context.debug_enabled()
    }
}
