//! Sink trait for log output destinations

use super::error::Result;

/// A destination for serialized log lines.
///
/// Concrete sinks (console, file, in-memory buffer, network collector) only
/// have to honor one contract: append a complete line atomically. The logger
/// serializes physical writes, so implementations never see two concurrent
/// `write_line` calls for the same logger.
pub trait Sink: Send {
    /// Append one serialized record. `line` never contains a newline; the
    /// sink adds the line terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}
