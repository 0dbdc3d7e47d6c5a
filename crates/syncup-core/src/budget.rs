//! Budget lookup and updates

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{BudgetDoc, BudgetLine};
use crate::month::Month;
use crate::store::Repository;

/// Get the budget for `month`
///
/// Without a month, or when the month has no budget, the first stored
/// budget is returned.
pub fn get_budget(repo: &dyn Repository, month: Option<&Month>) -> Result<BudgetDoc> {
    if let Some(month) = month {
        if let Some(doc) = repo.find_budget_by_month(month)? {
            return Ok(doc);
        }
    }

    repo.list_budgets()?
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFound("No budgets configured".to_string()))
}

/// Replace `month`'s budget lines, creating the budget if needed
pub fn set_budget(repo: &dyn Repository, month: &Month, lines: Vec<BudgetLine>) -> Result<BudgetDoc> {
    validate_lines(&lines)?;

    let doc = repo.upsert_budget(month, lines)?;
    info!(month = %month, id = %doc.id, "Budget updated");
    Ok(doc)
}

/// Check every monthly limit is a fraction in [0, 1]
pub fn validate_lines(lines: &[BudgetLine]) -> Result<()> {
    for line in lines {
        if !line.monthly_limit.is_finite() || !(0.0..=1.0).contains(&line.monthly_limit) {
            return Err(Error::InvalidData(format!(
                "monthlyLimit for {} must be between 0 and 1, got {}",
                line.category, line.monthly_limit
            )));
        }
    }
    Ok(())
}
