//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_store` - Shared utility to open the data file
//! - `parse_month` / `parse_fallback` - Argument parsing helpers
//! - `cmd_init` - Write the sample data file

use std::path::Path;

use anyhow::{bail, Context, Result};
use syncup_core::{BudgetFallback, Dataset, JsonStore, Month};

/// Open the JSON data file
pub fn open_store(data_path: &Path) -> Result<JsonStore> {
    JsonStore::open(data_path)
        .with_context(|| format!("Failed to open data file {}", data_path.display()))
}

/// Parse an optional `YYYY-MM` argument
pub fn parse_month(month: Option<&str>) -> Result<Option<Month>> {
    month
        .map(|m| m.parse::<Month>())
        .transpose()
        .context("Invalid --month")
}

/// Parse a budget fallback policy name
pub fn parse_fallback(name: &str) -> Result<BudgetFallback> {
    name.parse::<BudgetFallback>()
        .map_err(|e| anyhow::anyhow!("{} (use first-available, empty, or strict)", e))
}

pub fn cmd_init(data_path: &Path, force: bool) -> Result<()> {
    if data_path.exists() && !force {
        bail!(
            "Data file {} already exists (use --force to overwrite)",
            data_path.display()
        );
    }

    println!("🔧 Writing sample data to {}...", data_path.display());

    let sample = Dataset::sample().context("Failed to load bundled sample data")?;
    JsonStore::create(data_path, &sample).context("Failed to write data file")?;

    println!(
        "   {} accounts, {} transactions, {} budgets",
        sample.accounts.len(),
        sample.transactions.len(),
        sample.budgets.len()
    );
    println!("✅ Data file initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Start the API: syncup serve");
    println!("  2. View insights: syncup insights --month 2024-03");

    Ok(())
}
