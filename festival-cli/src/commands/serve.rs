//! HTTP server command
//!
//! Runs the festival API until Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use festival_server::db::migrations;
use festival_server::{run_server, FestivalStore, MemoryStore, PgStore, ServerConfig};

use crate::config::DatabaseArgs;

/// Storage backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// PostgreSQL (persistent)
    Postgres,
    /// Process memory (lost on exit)
    Memory,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Interface to listen on
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = StoreKind::Postgres)]
    pub store: StoreKind,

    /// Do not create tables at startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn FestivalStore> = match args.store {
        StoreKind::Postgres => {
            let pool = args.database.connect().await?;
            if args.skip_migrations {
                tracing::info!("Skipping migrations");
            } else {
                migrations::run(&pool)
                    .await
                    .context("Failed to create tables")?;
            }
            Arc::new(PgStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store - data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let config = args.server_config();
    tracing::info!("Starting festival server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
