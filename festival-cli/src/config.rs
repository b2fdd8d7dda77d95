//! Database connection settings
//!
//! Every field can come from a flag or its environment variable; `.env`
//! is loaded before parsing so it feeds the same variables.

use anyhow::{Context, Result};
use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::PgPool;

use festival_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};

/// PostgreSQL connection arguments shared by `serve` and `migrate`
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Full connection URL; overrides the individual DB_* settings
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "festivals")]
    pub db_name: String,

    /// TLS mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long, env = "DB_SSLMODE", default_value = "disable")]
    pub db_sslmode: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve connection options, preferring a non-empty DATABASE_URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = self.database_url.as_deref().filter(|u| !u.is_empty()) {
            return url.parse().context("Invalid DATABASE_URL");
        }

        let ssl_mode: PgSslMode = self
            .db_sslmode
            .parse()
            .with_context(|| format!("Invalid DB_SSLMODE '{}'", self.db_sslmode))?;

        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .database(&self.db_name)
            .ssl_mode(ssl_mode);
        if !self.db_password.is_empty() {
            options = options.password(&self.db_password);
        }

        Ok(options)
    }

    /// Open the connection pool.
    pub async fn connect(&self) -> Result<PgPool> {
        let options = self.connect_options()?;
        tracing::info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            "Connecting to database"
        );

        create_pool_with_options(options, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
