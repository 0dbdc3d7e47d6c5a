//! SyncUp CLI - personal finance demo backend
//!
//! Usage:
//!   syncup init                     Write the sample data file
//!   syncup serve --port 4000        Start the web server
//!   syncup insights --month 2024-03 Print a month's insight report

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init { force } => commands::cmd_init(&cli.data, force),
        Commands::Serve {
            port,
            host,
            require_auth,
            budget_fallback,
        } => commands::cmd_serve(&cli.data, &host, port, require_auth, &budget_fallback).await,
        Commands::Accounts => {
            let store = commands::open_store(&cli.data)?;
            commands::cmd_accounts(&store)
        }
        Commands::Transactions {
            account,
            category,
            from,
            to,
        } => {
            let store = commands::open_store(&cli.data)?;
            commands::cmd_transactions(
                &store,
                account.as_deref(),
                category.as_deref(),
                from.as_deref(),
                to.as_deref(),
            )
        }
        Commands::Budget { month } => {
            let store = commands::open_store(&cli.data)?;
            commands::cmd_budget(&store, month.as_deref())
        }
        Commands::Insights {
            month,
            budget_fallback,
        } => {
            let store = commands::open_store(&cli.data)?;
            commands::cmd_insights(&store, month.as_deref(), &budget_fallback)
        }
    }
}
