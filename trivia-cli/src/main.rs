//! trivia CLI - runs and administers the trivia quiz API
//!
//! - `serve`: HTTP API (Postgres, or seeded in-memory data)
//! - `migrate`: create tables, optionally seed sample data
//! - `config`: inspect or initialise `~/.trivia/config.toml`

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;
mod ui;

use config::TriviaConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "trivia", version, about = "Trivia quiz API server")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, global = true, env = "TRIVIA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Create database tables
    Migrate(commands::MigrateArgs),
    /// Inspect or initialise configuration
    Config(commands::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's env fallbacks see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(TriviaConfig::default_path);
    let config = TriviaConfig::load_from(&config_path)?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        level: config.logging.level.clone(),
    })
    .ok();
    tracing::debug!(config = %config_path.display(), "Config loaded");

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, config).await?,
        Commands::Config(args) => commands::run_config(args, &config_path, &config)?,
    }

    Ok(())
}
