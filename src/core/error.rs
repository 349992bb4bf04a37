//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed or missing configuration (empty name, bad level string).
    /// Always surfaced synchronously at the call that caused it.
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Reconfiguration or lookup requested for a logger never created
    #[error("No logger named '{name}' has been created")]
    LoggerNotFound { name: String },

    /// Failed to persist a record to a sink
    #[error("Sink write failed for '{sink}': {message}")]
    SinkWrite {
        sink: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized severity level name
    #[error("Invalid log level: '{0}'")]
    LevelParse(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a logger-not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        LoggerError::LoggerNotFound { name: name.into() }
    }

    /// Create a sink write error with the failing sink's name
    pub fn sink_write(
        sink: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            message: message.into(),
            source,
        }
    }
}
