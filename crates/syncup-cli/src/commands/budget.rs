//! Budget display command

use anyhow::Result;
use syncup_core::{budget, Repository};

use super::parse_month;

pub fn cmd_budget(store: &dyn Repository, month: Option<&str>) -> Result<()> {
    let month = parse_month(month)?;
    let doc = budget::get_budget(store, month.as_ref())?;

    if let Some(requested) = month {
        if requested != doc.month {
            println!("⚠️  No budget for {}, showing {}", requested, doc.month);
        }
    }

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
