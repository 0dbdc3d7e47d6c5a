//! Account listing command

use anyhow::Result;
use syncup_core::Repository;

pub fn cmd_accounts(store: &dyn Repository) -> Result<()> {
    let accounts = store.list_accounts()?;

    if accounts.is_empty() {
        println!("No accounts found.");
        return Ok(());
    }

    println!();
    println!("📁 Accounts");
    println!("   ─────────────────────────────────────────────────────────────");

    for account in accounts {
        println!(
            "   {} │ {} (…{}) │ {:>10.2} │ {}",
            account.id,
            account.name,
            account.mask,
            account.current_balance,
            account.account_type
        );
    }

    Ok(())
}
