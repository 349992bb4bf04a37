//! Basic registry usage demo
//!
//! Demonstrates obtaining named loggers, level filtering, structured fields,
//! and reconfiguration.
//!
//! Run with: cargo run --example basic_usage

use structured_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Structured Logger System - Basic Usage ===\n");

    let registry = LoggerRegistry::new();

    // Obtain a named logger; defaults to a stdout console sink
    let logger = registry.get_or_create("demo", LogLevel::Trace)?;

    println!("1. Records at different levels:");
    logger.trace("This is a trace record")?;
    logger.debug("This is a debug record")?;
    logger.info("This is an info record")?;
    logger.warn("This is a warning record")?;
    logger.error("This is an error record")?;
    logger.fatal("This is a fatal record")?;

    println!("\n2. Structured fields:");
    let fields = LogFields::new()
        .with_field("user_id", 12345)
        .with_field("latency_ms", 42.5)
        .with_field("cache_hit", true);
    logger.info_with_fields("Request processed", fields)?;

    println!("\n3. Same name resolves to the same instance:");
    let again = registry.get_or_create("demo", LogLevel::Error)?;
    println!(
        "   identical handle: {}, level still {}",
        std::sync::Arc::ptr_eq(&logger, &again),
        again.level()
    );

    println!("\n4. Reconfigure raises the threshold for every holder:");
    registry.reconfigure("demo", LogLevel::Error)?;
    logger.info("Hidden after reconfigure")?;
    logger.error("Still visible")?;

    println!("\n=== Demo completed ===");
    Ok(())
}
