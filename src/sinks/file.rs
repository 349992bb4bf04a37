//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sink appending JSON lines to a file (JSONL format).
///
/// Output is compatible with log aggregation tools like ELK and Loki.
pub struct FileSink {
    writer: BufWriter<File>,
    path: String,
}

impl FileSink {
    /// Open `path` for appending, creating the file if needed
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_write(&path_str, "failed to open log file", e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path_str,
        })
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .map_err(|e| LoggerError::sink_write(&self.path, "write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::sink_write(&self.path, "flush failed", e))
    }

    fn name(&self) -> &str {
        &self.path
    }
}
