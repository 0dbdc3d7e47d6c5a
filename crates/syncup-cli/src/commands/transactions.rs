//! Transaction listing command

use anyhow::{Context, Result};
use chrono::NaiveDate;
use syncup_core::models::Category;
use syncup_core::{Repository, TransactionFilter};

use super::truncate;

fn parse_date(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .with_context(|| format!("Invalid --{} date (use YYYY-MM-DD)", flag))
}

/// Right-align an amount in a 10-column field, then color it
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        let padded = format!("{:>10}", format!("${:.2}", amount.abs()));
        format!("\x1b[31m{}\x1b[0m", padded) // Red for expenses
    } else {
        let padded = format!("{:>10}", format!("+${:.2}", amount));
        format!("\x1b[32m{}\x1b[0m", padded) // Green for income
    }
}

pub fn cmd_transactions(
    store: &dyn Repository,
    account: Option<&str>,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let category = category
        .map(|c| c.parse::<Category>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let filter = TransactionFilter::new()
        .account_id(account)
        .category(category)
        .from_date(parse_date(from, "from")?)
        .to_date(parse_date(to, "to")?);

    let transactions = store.list_transactions(&filter)?;

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!();
    println!("📝 Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let pending = if tx.pending.unwrap_or(false) {
            " (pending)"
        } else {
            ""
        };

        println!(
            "   {} │ {} │ {:<14} │ {}{}",
            tx.date,
            format_amount(tx.amount),
            tx.category,
            truncate(tx.merchant.as_deref().unwrap_or("-"), 30),
            pending
        );
    }

    Ok(())
}
