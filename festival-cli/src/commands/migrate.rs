//! Table creation command

use anyhow::{Context, Result};
use clap::Parser;

use festival_server::db::migrations;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the festival tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to create tables")?;
    pool.close().await;
    Ok(())
}
