//! Named logger instance and its emission path

use super::{
    error::Result,
    fields::LogFields,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::LogRecord,
    sink::Sink,
    timestamp::TimestampFormat,
};
use parking_lot::{Mutex, RwLock};

/// What `emit` does when a sink write fails.
///
/// Logging must never abort the calling code path, so the default absorbs
/// the failure and counts it. Propagation is an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Swallow sink write failures, increment the dropped-record counter,
    /// and return `Ok(())` (default)
    #[default]
    CountAndDrop,

    /// Surface sink write failures synchronously from `emit`
    Propagate,
}

/// A named logger handle.
///
/// Obtained from [`LoggerRegistry`](super::registry::LoggerRegistry); all
/// holders of the same name share one instance, so a `reconfigure` through
/// the registry is immediately visible on every handle.
///
/// The threshold sits behind its own `RwLock` so the emit path only takes a
/// read lock on it; physical sink writes are serialized by a separate lock
/// at line granularity.
pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    base_fields: LogFields,
    sink: Mutex<Box<dyn Sink>>,
    timestamp_format: TimestampFormat,
    error_policy: ErrorPolicy,
    metrics: LoggerMetrics,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &*self.min_level.read())
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub(crate) fn new(name: String, config: LoggerConfig) -> Self {
        let sink = config
            .sink
            .unwrap_or_else(|| Box::new(crate::sinks::ConsoleSink::new()));
        Self {
            name,
            min_level: RwLock::new(config.level),
            base_fields: config.base_fields,
            sink: Mutex::new(sink),
            timestamp_format: config.timestamp_format,
            error_policy: config.error_policy,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current threshold
    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub(crate) fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Build and write one record, or do nothing if `level` is below the
    /// threshold.
    ///
    /// Base fields configured on the logger are merged under the caller's
    /// fields; the caller wins on key collision. The serialized line is
    /// written with a single sink call, so concurrent emits never interleave
    /// bytes of two records.
    ///
    /// Under [`ErrorPolicy::CountAndDrop`] this never returns an error for a
    /// failed write; the drop is counted in [`Self::metrics`] instead.
    pub fn emit(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        fields: LogFields,
    ) -> Result<()> {
        if level < *self.min_level.read() {
            self.metrics.record_filtered();
            return Ok(());
        }

        let merged = if self.base_fields.is_empty() {
            fields
        } else {
            self.base_fields.merged_with(&fields)
        };

        let record = LogRecord::new(level, self.name.clone(), message, merged);
        let line = match record.to_json_line(&self.timestamp_format) {
            Ok(line) => line,
            Err(e) => return self.handle_write_failure(e.into()),
        };

        let result = self.sink.lock().write_line(&line);
        match result {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => self.handle_write_failure(e),
        }
    }

    fn handle_write_failure(&self, error: crate::core::error::LoggerError) -> Result<()> {
        match self.error_policy {
            ErrorPolicy::CountAndDrop => {
                self.metrics.record_dropped();
                Ok(())
            }
            ErrorPolicy::Propagate => Err(error),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Trace, message, LogFields::new())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Debug, message, LogFields::new())
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Info, message, LogFields::new())
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Warn, message, LogFields::new())
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Error, message, LogFields::new())
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Fatal, message, LogFields::new())
    }

    /// Helper for structured info logging
    pub fn info_with_fields(&self, message: impl Into<String>, fields: LogFields) -> Result<()> {
        self.emit(LogLevel::Info, message, fields)
    }

    /// Helper for structured warn logging
    pub fn warn_with_fields(&self, message: impl Into<String>, fields: LogFields) -> Result<()> {
        self.emit(LogLevel::Warn, message, fields)
    }

    /// Helper for structured error logging
    pub fn error_with_fields(&self, message: impl Into<String>, fields: LogFields) -> Result<()> {
        self.emit(LogLevel::Error, message, fields)
    }
}

/// Configuration for constructing a logger through the registry.
///
/// # Example
/// ```
/// use structured_logger_system::prelude::*;
///
/// let registry = LoggerRegistry::new();
/// let logger = registry
///     .get_or_create_with(
///         "api",
///         LoggerConfig::new(LogLevel::Debug)
///             .base_field("service", "api-gateway")
///             .error_policy(ErrorPolicy::Propagate),
///     )
///     .unwrap();
/// logger.debug("configured").unwrap();
/// ```
pub struct LoggerConfig {
    level: LogLevel,
    sink: Option<Box<dyn Sink>>,
    base_fields: LogFields,
    error_policy: ErrorPolicy,
    timestamp_format: TimestampFormat,
}

impl LoggerConfig {
    /// Create a configuration with the given threshold.
    ///
    /// Defaults: stdout console sink, no base fields, count-and-drop error
    /// policy, ISO 8601 timestamps.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            sink: None,
            base_fields: LogFields::new(),
            error_policy: ErrorPolicy::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the output sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the output sink from an existing boxed value
    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Add a base field attached to every record this logger emits.
    ///
    /// Caller-supplied fields override base fields on key collision.
    #[must_use = "builder methods return a new value"]
    pub fn base_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::fields::FieldValue>,
    {
        self.base_fields.insert(key, value);
        self
    }

    /// Replace all base fields
    #[must_use = "builder methods return a new value"]
    pub fn base_fields(mut self, fields: LogFields) -> Self {
        self.base_fields = fields;
        self
    }

    /// Set what `emit` does on sink write failure
    #[must_use = "builder methods return a new value"]
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the timestamp format used in serialized records
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::BufferSink;

    fn buffer_logger(level: LogLevel) -> (Logger, BufferSink) {
        let sink = BufferSink::new();
        let logger = Logger::new(
            "test".to_string(),
            LoggerConfig::new(level).sink(sink.clone()),
        );
        (logger, sink)
    }

    #[test]
    fn test_emit_above_threshold() {
        let (logger, sink) = buffer_logger(LogLevel::Info);
        logger.emit(LogLevel::Warn, "something", LogFields::new()).unwrap();
        assert_eq!(sink.lines().len(), 1);
        assert_eq!(logger.metrics().records_written(), 1);
    }

    #[test]
    fn test_emit_below_threshold_is_noop() {
        let (logger, sink) = buffer_logger(LogLevel::Info);
        logger.emit(LogLevel::Debug, "quiet", LogFields::new()).unwrap();
        assert!(sink.lines().is_empty());
        assert_eq!(logger.metrics().records_filtered(), 1);
        assert_eq!(logger.metrics().records_written(), 0);
    }

    #[test]
    fn test_emit_at_threshold_writes() {
        let (logger, sink) = buffer_logger(LogLevel::Info);
        logger.info("exactly at threshold").unwrap();
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_base_field_merge() {
        let sink = BufferSink::new();
        let logger = Logger::new(
            "svc".to_string(),
            LoggerConfig::new(LogLevel::Info)
                .sink(sink.clone())
                .base_field("a", 0)
                .base_field("b", 2),
        );

        logger
            .emit(LogLevel::Info, "m", LogFields::new().with_field("a", 1))
            .unwrap();

        let lines = sink.lines();
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed["a"], 1);
        assert_eq!(parsed["b"], 2);
    }

    #[test]
    fn test_shorthands_fix_level() {
        let (logger, sink) = buffer_logger(LogLevel::Trace);
        logger.trace("t").unwrap();
        logger.debug("d").unwrap();
        logger.info("i").unwrap();
        logger.warn("w").unwrap();
        logger.error("e").unwrap();
        logger.fatal("f").unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 6);
        let levels: Vec<String> = lines
            .iter()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["level"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(levels, vec!["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
    }
}
