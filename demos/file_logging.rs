//! File logging demo
//!
//! Writes JSON-line records to a file sink and reads them back.
//!
//! Run with: cargo run --example file_logging

use structured_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Structured Logger System - File Logging ===\n");

    let log_path = std::env::temp_dir().join("structured_demo.jsonl");
    let sink = FileSink::new(&log_path)?;

    let registry = LoggerRegistry::new();
    let logger = registry.get_or_create_with(
        "service",
        LoggerConfig::new(LogLevel::Info)
            .sink(sink)
            .base_field("service", "demo-api")
            .base_field("version", "0.1.0"),
    )?;

    for i in 0..5 {
        let fields = LogFields::new()
            .with_field("iteration", i)
            .with_field("status", 200);
        logger.info_with_fields(format!("Handled request {}", i), fields)?;
    }
    logger.flush()?;

    println!("Wrote records to {}", log_path.display());
    for line in std::fs::read_to_string(&log_path)?.lines() {
        println!("  {}", line);
    }

    println!(
        "\nwritten={} filtered={} dropped={}",
        logger.metrics().records_written(),
        logger.metrics().records_filtered(),
        logger.metrics().dropped_count()
    );

    Ok(())
}
