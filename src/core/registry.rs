//! Process-wide registry of named loggers

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::{Logger, LoggerConfig},
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// Single authority for obtaining and configuring named loggers.
///
/// Holds at most one [`Logger`] per name; concurrent creation requests for
/// the same name always resolve to the same instance. Construct registries
/// explicitly and pass them through application startup, or use the one
/// documented process-wide instance from [`LoggerRegistry::global`].
///
/// # Example
/// ```
/// use structured_logger_system::prelude::*;
///
/// let registry = LoggerRegistry::new();
/// let a = registry.get_or_create("api", LogLevel::Info).unwrap();
/// let b = registry.get_or_create("api", LogLevel::Debug).unwrap();
///
/// // Same underlying instance; the second call's level was ignored
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// assert_eq!(b.level(), LogLevel::Info);
/// ```
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide registry instance, initialized lazily on first use.
    ///
    /// Lives for the lifetime of the process and is never torn down; test
    /// harnesses may call [`Self::reset`] between cases.
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL_REGISTRY.get_or_init(LoggerRegistry::new)
    }

    /// Return the logger for `name`, creating it with the given threshold
    /// and a stdout console sink if it does not exist yet.
    ///
    /// First-writer-wins: when the logger already exists it is returned
    /// unchanged and the supplied `level` is ignored, so every holder keeps
    /// a stable handle. Use [`Self::reconfigure`] to change an existing
    /// logger's threshold.
    pub fn get_or_create(&self, name: &str, level: LogLevel) -> Result<Arc<Logger>> {
        self.get_or_create_with(name, LoggerConfig::new(level))
    }

    /// Like [`Self::get_or_create`] but with the full configuration surface
    /// (sink, base fields, error policy, timestamp format).
    ///
    /// The supplied configuration is ignored when the logger already exists.
    pub fn get_or_create_with(&self, name: &str, config: LoggerConfig) -> Result<Arc<Logger>> {
        if name.is_empty() {
            return Err(LoggerError::config(
                "LoggerRegistry",
                "logger name must be non-empty",
            ));
        }

        let mut loggers = self.loggers.lock();
        if let Some(existing) = loggers.get(name) {
            return Ok(Arc::clone(existing));
        }

        let logger = Arc::new(Logger::new(name.to_string(), config));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        Ok(logger)
    }

    /// Look up an existing logger without creating one
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().get(name).map(Arc::clone)
    }

    /// Update the threshold of an existing logger in place.
    ///
    /// The change is immediately visible on every handle previously returned
    /// for `name`. Fails with [`LoggerError::LoggerNotFound`] if no logger
    /// with that name has been created.
    pub fn reconfigure(&self, name: &str, level: LogLevel) -> Result<()> {
        let loggers = self.loggers.lock();
        match loggers.get(name) {
            Some(logger) => {
                logger.set_min_level(level);
                Ok(())
            }
            None => Err(LoggerError::not_found(name)),
        }
    }

    /// Clear all cached instances. Test/administrative use only.
    ///
    /// Previously returned handles keep functioning against their old
    /// configuration but are no longer reachable through the registry.
    pub fn reset(&self) {
        self.loggers.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
