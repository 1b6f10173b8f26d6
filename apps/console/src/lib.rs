//! # Stockroom Console Library
//!
//! Core library for the Stockroom inventory console.
//! This is the entry point that loads configuration and runs the stdin loop.
//!
//! ## Module Organization
//! ```text
//! stockroom_console/
//! ├── lib.rs          ◄─── You are here (startup & run loop)
//! ├── repl.rs         ◄─── Line parsing and command dispatch
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── inventory.rs◄─── Shared product and order stores
//! │   └── config.rs   ◄─── Console configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product list and CRUD commands
//! │   ├── order.rs    ◄─── Order placement and history
//! │   ├── catalog.rs  ◄─── Catalog load and status
//! │   └── report.rs   ◄─── Dashboard and reports
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## I/O Contract
//! One command per stdin line. Each response is written to stdout as JSON;
//! failures are written as `{ "error": { "code": ..., "message": ... } }`.
//! Logs go to stderr so stdout stays machine-readable.

pub mod commands;
pub mod error;
pub mod repl;
pub mod state;

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use repl::{parse_command, render, Command, Console};
use state::ConsoleConfig;

/// Runs the console until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults ─► stockroom.toml ─► STOCKROOM_* environment             │
/// │                                                                         │
/// │  3. Autoload Catalog (if enabled) ────────────────────────────────────► │
/// │     • A failure is logged; the console still starts                     │
/// │                                                                         │
/// │  4. Read stdin line by line until quit ───────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConsoleConfig::load(config_path)?;
    info!(store = %config.store.name, source = %config.catalog.source, "Starting Stockroom console");

    let console = Console::new(config);

    if console.config().catalog.autoload {
        if let Err(err) = console.execute(Command::Ensure).await {
            warn!(code = ?err.code, message = %err.message, "Catalog autoload failed, starting with an empty store");
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let outcome = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => console.execute(command).await,
            Err(err) => Err(err),
        };

        let mut rendered = render(&outcome);
        rendered.push('\n');
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("Console closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
