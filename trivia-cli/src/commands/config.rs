//! Config inspection commands

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::TriviaConfig;
use crate::ui;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init {
        /// Force overwrite existing config
        #[arg(long, short)]
        force: bool,
    },
    /// Print the effective config (database password masked)
    Show,
    /// Show config file path
    Path,
}

pub fn run_config(args: ConfigArgs, path: &Path, config: &TriviaConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Init { force } => run_init(path, force),
        ConfigCommands::Show => {
            print!("{}", config.redacted().to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}\n\nUse --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(path, TriviaConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ui::success(&format!("Created config at: {}", path.display()));
    Ok(())
}
