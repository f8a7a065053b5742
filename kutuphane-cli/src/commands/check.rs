//! Connectivity check command

use anyhow::{bail, Context, Result};
use clap::Parser;

use kutuphane_server::db::describe_session;
use kutuphane_server::{create_pool, AppConfig};

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Schema to check instead of DB_SCHEMA
    #[arg(long)]
    pub schema: Option<String>,
}

/// Open one session, print the bound schema and server version.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(schema) = args.schema.as_deref() {
        config.db.schema = kutuphane_server::SchemaName::new(schema)?;
    }

    let pool = create_pool(&config.db)
        .await
        .context("Failed to connect to database")?;
    let info = describe_session(&pool).await?;
    pool.close().await;

    println!("server:  {}", info.server_version);
    match info.current_schema {
        Some(schema) => println!("schema:  {}", schema),
        None => bail!(
            "schema '{}' does not exist on {}:{}/{}",
            config.db.schema.as_str(),
            config.db.host,
            config.db.port,
            config.db.database
        ),
    }

    Ok(())
}
