//! Immutable log record built at emit time

use super::fields::LogFields;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};

/// A single log record captured at emit time.
///
/// Records are immutable values: timestamp, severity, owning logger name,
/// message, and the merged structured fields.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub logger: String,
    pub message: String,
    pub fields: LogFields,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        logger: impl Into<String>,
        message: impl Into<String>,
        fields: LogFields,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            logger: logger.into(),
            message: message.into(),
            fields,
        }
    }

    /// Serialize to the one-object-per-line wire format.
    ///
    /// Key order is fixed: `timestamp`, `level`, `logger`, `message`, then
    /// the structured fields in insertion order. Relies on serde_json's
    /// `preserve_order` feature to keep map insertion order.
    pub fn to_json_line(&self, timestamp_format: &TimestampFormat) -> serde_json::Result<String> {
        let mut obj = serde_json::Map::new();
        obj.insert(
            "timestamp".to_string(),
            timestamp_format.to_json_value(&self.timestamp),
        );
        obj.insert(
            "level".to_string(),
            serde_json::Value::String(self.level.to_str().to_string()),
        );
        obj.insert(
            "logger".to_string(),
            serde_json::Value::String(self.logger.clone()),
        );
        obj.insert(
            "message".to_string(),
            serde_json::Value::String(self.message.clone()),
        );
        for (key, value) in self.fields.iter() {
            obj.insert(key.to_string(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(obj))
    }
}
