//! Core logger types and the registry

pub mod error;
pub mod fields;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use fields::{FieldValue, LogFields};
pub use log_level::LogLevel;
pub use logger::{ErrorPolicy, Logger, LoggerConfig};
pub use metrics::LoggerMetrics;
pub use record::LogRecord;
pub use registry::LoggerRegistry;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
