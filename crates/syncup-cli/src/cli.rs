//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SyncUp - personal finance demo backend
#[derive(Parser)]
#[command(name = "syncup")]
#[command(about = "Personal finance demo API backed by a JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file path
    #[arg(long, env = "SYNCUP_DATA", default_value = "data/sample.json", global = true)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the bundled sample dataset to the data file
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "4000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Require `Authorization: Bearer <token>` on API requests
        ///
        /// The token is read from SYNCUP_DEMO_TOKEN (default: syncup-demo-token).
        #[arg(long)]
        require_auth: bool,

        /// Budget used when a month has none: first-available, empty, strict
        #[arg(long, env = "SYNCUP_BUDGET_FALLBACK", default_value = "first-available")]
        budget_fallback: String,
    },

    /// List accounts
    Accounts,

    /// List transactions
    Transactions {
        /// Filter by account ID
        #[arg(long)]
        account: Option<String>,

        /// Filter by category (e.g. "Food and Drink")
        #[arg(long)]
        category: Option<String>,

        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the budget for a month
    Budget {
        /// Month (YYYY-MM); defaults to the first stored budget
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the insight report for a month
    Insights {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Budget used when the month has none: first-available, empty, strict
        #[arg(long, env = "SYNCUP_BUDGET_FALLBACK", default_value = "first-available")]
        budget_fallback: String,
    },
}
