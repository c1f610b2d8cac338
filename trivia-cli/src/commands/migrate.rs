//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations};

use crate::config::TriviaConfig;
use crate::ui;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Also insert the sample categories and questions
    #[arg(long)]
    pub seed: bool,
}

/// Create tables (and optionally seed them)
pub async fn run_migrate(args: MigrateArgs, config: TriviaConfig) -> Result<()> {
    let database_url = args
        .database_url
        .or(config.database.url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database] url in the config file")?;

    let pool = create_pool_with_options(&database_url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Migrations failed")?;
    ui::success("Tables ready");

    if args.seed {
        let report = migrations::seed(&pool).await.context("Seeding failed")?;
        ui::success(&format!(
            "Seeded {} categories and {} questions",
            report.categories, report.questions
        ));
    }

    Ok(())
}
