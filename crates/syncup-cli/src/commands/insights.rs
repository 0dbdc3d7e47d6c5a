//! Insight report command

use anyhow::Result;
use syncup_core::{InsightEngine, InsightReport, Month, Repository};

use super::{parse_fallback, parse_month};

/// Build the report for `month` (current month when omitted)
pub fn build_insights(
    store: &dyn Repository,
    month: Option<&str>,
    budget_fallback: &str,
) -> Result<InsightReport> {
    let engine = InsightEngine::new(parse_fallback(budget_fallback)?);
    let month = match parse_month(month)? {
        Some(m) => m,
        None => Month::current()?,
    };

    Ok(engine.report(store, &month)?)
}

pub fn cmd_insights(store: &dyn Repository, month: Option<&str>, budget_fallback: &str) -> Result<()> {
    let report = build_insights(store, month, budget_fallback)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
