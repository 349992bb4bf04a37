//! In-memory sink for tests and capture harnesses

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink collecting lines into a shared in-memory buffer.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the written lines through another.
///
/// # Example
/// ```
/// use structured_logger_system::prelude::*;
/// use structured_logger_system::sinks::BufferSink;
///
/// let sink = BufferSink::new();
/// let registry = LoggerRegistry::new();
/// let logger = registry
///     .get_or_create_with("t", LoggerConfig::new(LogLevel::Info).sink(sink.clone()))
///     .unwrap();
///
/// logger.info("captured").unwrap();
/// assert_eq!(sink.lines().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of all lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}
