//! Aura CLI - main entry point.
//!
//! Interactive chat (default) plus catalog listing and admin
//! subcommands.

use anyhow::Result;
use clap::Parser;

use aura_cli::cli::{Cli, dispatch_command};

/// Guard that ensures the debug log file is flushed when dropped.
struct DebugLogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Set up debug file logging that writes trace-level logs to ./debug.txt.
fn setup_debug_file_logging() -> Result<DebugLogGuard> {
    use std::fs::File;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let debug_file_path = std::env::current_dir()?.join("debug.txt");
    let file = File::create(&debug_file_path).map_err(|e| {
        anyhow::anyhow!("Failed to create debug.txt: {}. Check write permissions.", e)
    })?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("trace"))
        .with(file_layer)
        .init();

    eprintln!("Debug mode enabled: logging to {}", debug_file_path.display());
    Ok(DebugLogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Debug mode routes everything to the file; stderr logging would
    // corrupt the TUI frame otherwise.
    let _debug_guard = if cli.debug {
        Some(setup_debug_file_logging()?)
    } else {
        None
    };

    if cli.command.is_some() && !cli.debug {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| cli.log_level.as_filter_str().to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    dispatch_command(cli).await
}
