//! kutuphane CLI - runs the library records HTTP server
//!
//! Subcommands:
//! - `serve`: load configuration, connect to the store, and serve HTTP
//! - `check`: open one session and report the bound schema

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "kutuphane",
    author,
    version,
    about = "HTTP backend for library, staff, sponsor and visitor records"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Verify database connectivity and schema binding
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the working directory; real environment variables win
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Check(args) => commands::run_check(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from([
            "kutuphane",
            "--debug",
            "serve",
            "--bind",
            "127.0.0.1:8080",
            "--cors-permissive",
        ])
        .unwrap();
        assert!(cli.debug);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.map(|a| a.port()), Some(8080));
                assert!(args.cors_permissive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["kutuphane", "serve", "--bind", "nowhere"]).is_err());
    }
}
