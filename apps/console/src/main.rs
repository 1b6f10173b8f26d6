//! # Stockroom Console Entry Point
//!
//! ## Usage
//! ```bash
//! # Seeded catalog, config from the platform config directory
//! cargo run -p stockroom-console
//!
//! # Explicit config file
//! cargo run -p stockroom-console -- --config ./stockroom.toml
//! ```
//!
//! The actual setup is in lib.rs so it can be tested without a process.

use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Inventory Console");
                println!();
                println!("Usage: stockroom [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file (default: platform config dir/stockroom.toml)");
                println!("  -h, --help           Show this help message");
                println!();
                println!("Type 'help' at the prompt for the command list.");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    stockroom_console::run(config_path).await
}
