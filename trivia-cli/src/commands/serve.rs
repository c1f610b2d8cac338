//! HTTP server command
//!
//! Serves the trivia API from Postgres, or from seeded in-memory data with
//! `--in-memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations};
use trivia_server::{run_server, MemoryStore, PgStore, TriviaStore};

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve built-in sample data from memory instead of Postgres
    #[arg(long)]
    pub in_memory: bool,

    /// Create tables and seed sample data before serving
    #[arg(long)]
    pub migrate: bool,

    /// Allowed CORS origin (repeatable; default: any)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,

    /// Match search terms case-sensitively
    #[arg(long)]
    pub case_sensitive_search: bool,
}

impl ServeArgs {
    /// Layer flags over the loaded config.
    pub fn apply(&self, config: &mut TriviaConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        if !self.cors_origins.is_empty() {
            config.server.cors_origins = self.cors_origins.clone();
        }
        if self.case_sensitive_search {
            config.search.case_sensitive = true;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: TriviaConfig) -> Result<()> {
    args.apply(&mut config);
    let server_config = config.server_config()?;

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        if config.database.url.is_some() {
            tracing::warn!("--in-memory set, ignoring configured database URL");
        }
        tracing::warn!("Serving in-memory sample data; changes are lost on exit");
        Arc::new(MemoryStore::seeded())
    } else {
        let database_url = config.database.url.as_deref().context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database] url in the config file",
        )?;

        let pool = create_pool_with_options(database_url, config.database.max_connections)
            .await
            .context("Failed to create database pool")?;

        if args.migrate {
            migrations::run(&pool).await.context("Migrations failed")?;
            migrations::seed(&pool).await.context("Seeding failed")?;
        }

        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = TriviaConfig::default();
        config.server.cors_origins = vec!["http://file.example".into()];

        let args = ServeArgs {
            bind: Some("0.0.0.0:8080".parse().unwrap()),
            database_url: Some("postgres://localhost/trivia_test".into()),
            cors_origins: vec!["http://localhost:3000".into()],
            case_sensitive_search: true,
            ..ServeArgs::default()
        };
        args.apply(&mut config);

        assert_eq!(config.server.bind.port(), 8080);
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/trivia_test")
        );
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert!(config.search.case_sensitive);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = TriviaConfig::default();
        config.search.case_sensitive = true;
        config.database.url = Some("postgres://localhost/trivia".into());

        ServeArgs::default().apply(&mut config);

        assert!(config.search.case_sensitive);
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/trivia"));
    }
}
