//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! an `emit` call and yields its `Result`, so call sites decide whether to
//! check it (under the default error policy it is always `Ok`).
//!
//! # Examples
//!
//! ```
//! use structured_logger_system::prelude::*;
//! use structured_logger_system::info;
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry.get_or_create("server", LogLevel::Info).unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started").ok();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).ok();
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use structured_logger_system::prelude::*;
/// # let registry = LoggerRegistry::new();
/// # let logger = registry.get_or_create("demo", LogLevel::Info).unwrap();
/// use structured_logger_system::log;
/// log!(logger, LogLevel::Info, "Simple message").ok();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).ok();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit($level, format!($($arg)+), $crate::LogFields::new())
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
