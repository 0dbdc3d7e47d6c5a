//! Insight engine - monthly budget utilization

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{BudgetDoc, BudgetLine, Category, Transaction};
use crate::month::Month;
use crate::store::{Repository, TransactionFilter};

use super::types::{BudgetStatus, CategoryInsight, InsightReport};

#[derive(Default)]
struct CategoryTotals {
    spent: f64,
    count: usize,
}

/// Compute the insight report for `month`
///
/// Only transactions dated within the month (both ends inclusive) count.
/// The report has one entry per budget line, in descending order of spend;
/// lines with equal spend keep their budget order.
pub fn calculate_insights(
    month: &Month,
    lines: &[BudgetLine],
    transactions: &[Transaction],
) -> InsightReport {
    let in_month: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| month.contains(t.date))
        .collect();

    let mut by_category: HashMap<Category, CategoryTotals> = HashMap::new();
    let mut income = 0.0;
    let mut expenses = 0.0;

    for tx in &in_month {
        let totals = by_category.entry(tx.category).or_default();
        if tx.amount < 0.0 {
            totals.spent += tx.amount.abs();
            expenses += tx.amount.abs();
        } else if tx.amount > 0.0 {
            income += tx.amount;
        }
        totals.count += 1;
    }

    let mut categories: Vec<CategoryInsight> = lines
        .iter()
        .map(|line| {
            let (spent, count) = by_category
                .get(&line.category)
                .map(|t| (t.spent, t.count))
                .unwrap_or((0.0, 0));
            let limit = income * line.monthly_limit;
            let usage_pct = if limit > 0.0 {
                spent / limit * 100.0
            } else {
                0.0
            };

            CategoryInsight {
                category: line.category,
                spent,
                limit,
                usage_pct,
                status: BudgetStatus::from_usage_pct(usage_pct),
                count,
            }
        })
        .collect();

    // Stable sort keeps budget order for equal spend
    categories.sort_by(|a, b| b.spent.total_cmp(&a.spent));

    InsightReport {
        month: *month,
        income,
        expenses,
        net: income - expenses,
        categories,
    }
}

/// What to do when no budget document exists for the requested month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetFallback {
    /// Use the first stored budget document
    #[default]
    FirstAvailable,
    /// Report totals with no category lines
    Empty,
    /// Fail with a not-found error
    Strict,
}

impl BudgetFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetFallback::FirstAvailable => "first-available",
            BudgetFallback::Empty => "empty",
            BudgetFallback::Strict => "strict",
        }
    }
}

impl fmt::Display for BudgetFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetFallback {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-available" | "first" => Ok(BudgetFallback::FirstAvailable),
            "empty" => Ok(BudgetFallback::Empty),
            "strict" => Ok(BudgetFallback::Strict),
            _ => Err(format!("Unknown budget fallback: {}", s)),
        }
    }
}

/// Repository-backed insight engine
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightEngine {
    fallback: BudgetFallback,
}

impl InsightEngine {
    pub fn new(fallback: BudgetFallback) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> BudgetFallback {
        self.fallback
    }

    /// Find the budget for `month`, applying the fallback policy
    pub fn resolve_budget(
        &self,
        repo: &dyn Repository,
        month: &Month,
    ) -> Result<Option<BudgetDoc>> {
        if let Some(doc) = repo.find_budget_by_month(month)? {
            return Ok(Some(doc));
        }

        match self.fallback {
            BudgetFallback::FirstAvailable => {
                let first = repo.list_budgets()?.into_iter().next();
                if let Some(ref doc) = first {
                    tracing::debug!(
                        requested = %month,
                        using = %doc.month,
                        "No budget for month, using first available"
                    );
                }
                Ok(first)
            }
            BudgetFallback::Empty => Ok(None),
            BudgetFallback::Strict => Err(Error::NotFound(format!("Budget for {}", month))),
        }
    }

    /// Build the insight report for `month` from the repository
    pub fn report(&self, repo: &dyn Repository, month: &Month) -> Result<InsightReport> {
        let budget = self.resolve_budget(repo, month)?;
        let transactions = repo.list_transactions(&TransactionFilter::new())?;

        let lines = budget.as_ref().map(|b| b.lines.as_slice()).unwrap_or(&[]);
        let report = calculate_insights(month, lines, &transactions);

        tracing::debug!(
            month = %month,
            budget = budget.as_ref().map(|b| b.id.as_str()).unwrap_or("none"),
            categories = report.categories.len(),
            "Insight report computed"
        );

        Ok(report)
    }
}
