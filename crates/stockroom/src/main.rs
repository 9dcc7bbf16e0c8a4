//! # Stockroom CLI (`stockd`)
//!
//! The `stockd` binary starts the catalog HTTP server and provides a
//! configuration check command.
//!
//! ## Usage
//!
//! ```bash
//! stockd --config ./config/stockd.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stockd serve` | Seed the store and start the HTTP server |
//! | `stockd serve --sample` | Serve the built-in five-record demo catalog |
//! | `stockd check` | Validate the config file and seed file without serving |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use stockroom::config::load_config;
use stockroom::seed;
use stockroom::server::run_server;
use stockroom_core::store::{MemoryStore, ProductStore};

/// Stockroom CLI — a product catalog service with filtering, sorting, and
/// pagination.
#[derive(Parser)]
#[command(
    name = "stockd",
    about = "Stockroom — a product catalog HTTP service",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/stockd.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Builds an in-memory store, seeds it from `[catalog].seed` when
    /// configured (or from the built-in samples with `--sample`), and
    /// serves until terminated.
    Serve {
        /// Seed the built-in demo catalog instead of the configured file.
        #[arg(long)]
        sample: bool,
    },

    /// Validate the configuration and seed file, then exit.
    ///
    /// Fails with a non-zero status when the config does not parse or the
    /// seed file contains an invalid entry.
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Serve { sample } => {
            let store: Arc<dyn ProductStore> = Arc::new(MemoryStore::new());
            if sample {
                let count = seed::seed_sample(store.as_ref()).await?;
                println!("seeded {} sample products", count);
            } else if let Some(seed_path) = &config.catalog.seed {
                let count = seed::seed_from_file(store.as_ref(), seed_path).await?;
                println!("seeded {} products from {}", count, seed_path.display());
            }
            run_server(config, store).await
        }
        Commands::Check => {
            println!("config ok: {}", cli.config.display());
            if let Some(seed_path) = &config.catalog.seed {
                let drafts = seed::read_seed_file(seed_path)?;
                println!("seed ok: {} products in {}", drafts.len(), seed_path.display());
            } else {
                println!("no seed file configured");
            }
            Ok(())
        }
    }
}
