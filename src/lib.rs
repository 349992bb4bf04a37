//! # Structured Logger System
//!
//! A registry-based structured logging library: named logger instances with
//! per-logger level filtering, emitting one JSON object per line.
//!
//! ## Features
//!
//! - **One logger per name**: a registry guarantees a single shared instance
//!   per name across the process
//! - **Structured records**: typed key-value fields instead of opaque text
//! - **Thread Safe**: designed for concurrent call sites; concurrent emits
//!   never interleave record bytes
//! - **Never crashes callers**: sink write failures are counted, not thrown,
//!   unless propagation is explicitly enabled

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ErrorPolicy, FieldValue, LogFields, LogLevel, LogRecord, Logger, LoggerConfig,
        LoggerError, LoggerMetrics, LoggerRegistry, Result, Sink, TimestampFormat,
    };
    pub use crate::sinks::{BufferSink, ConsoleSink, FileSink};
}

pub use crate::core::{
    ErrorPolicy, FieldValue, LogFields, LogLevel, LogRecord, Logger, LoggerConfig, LoggerError,
    LoggerMetrics, LoggerRegistry, Result, Sink, TimestampFormat,
};
pub use crate::sinks::{BufferSink, ConsoleSink, FileSink};
