//! Ambient logger and legacy bridge example
//!
//! Demonstrates installing a console logger as the ambient logger and
//! redirecting the plain line logger into it.
//!
//! Run with: cargo run --example ambient_usage

use ambient_logger::prelude::*;
use ambient_logger::{bridge, global, info, std_print, stdlog};
use std::sync::Arc;

fn handle_request(id: u32) {
    // No logger parameter: this goes wherever the ambient logger points.
    global::sugared().infow("handling request", [("request_id", id)]);
}

fn legacy_component() {
    std_print!("legacy component says hello ({} workers)", 4);
}

fn main() -> Result<()> {
    println!("=== Ambient Logger - Usage Example ===\n");

    println!("1. Before any replacement the ambient logger discards:");
    handle_request(1);

    println!("\n2. With a console logger installed:");
    let logger = Arc::new(
        Logger::builder()
            .min_level(LogLevel::Debug)
            .appender(ConsoleAppender::new().with_location(true))
            .field("service", "demo")
            .build(),
    );
    let restore_globals = global::replace_globals(Arc::clone(&logger));
    handle_request(2);
    info!(global::logger(), "ambient format macro: {}", 42);

    println!("\n3. Line logger before and during redirect:");
    stdlog::set_flags(Flags::STD | Flags::SHORT_FILE);
    legacy_component();
    {
        let _redirect = bridge::redirect_std_log(Arc::clone(&logger)).guard();
        legacy_component();
    }
    legacy_component();

    restore_globals.restore();
    println!("\n4. Restored: the ambient logger discards again");
    handle_request(3);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
