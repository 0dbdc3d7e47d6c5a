//! Data access layer over the flat JSON datastore
//!
//! This module is organized by backend:
//! - `json` - File-backed store (the production datastore)
//! - `memory` - In-memory store for tests and demos
//! - `filter` - Transaction query filter
//!
//! Both backends hold a [`Dataset`] and implement [`Repository`], which is
//! what the rest of the crate depends on.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Account, BudgetDoc, BudgetLine, Transaction};
use crate::month::Month;

mod filter;
mod json;
mod memory;

pub use filter::TransactionFilter;
pub use json::JsonStore;
pub use memory::MemoryStore;

/// Bundled demo dataset written by `syncup init`
const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

/// Read/write access to accounts, transactions, and budgets
pub trait Repository: Send + Sync {
    /// List all accounts in stored order
    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// List transactions matching `filter`, in stored order
    fn list_transactions(&self, filter: &TransactionFilter<'_>) -> Result<Vec<Transaction>>;

    /// List all budget documents in stored order
    fn list_budgets(&self) -> Result<Vec<BudgetDoc>>;

    /// Find the budget document for exactly `month`
    fn find_budget_by_month(&self, month: &Month) -> Result<Option<BudgetDoc>> {
        Ok(self
            .list_budgets()?
            .into_iter()
            .find(|b| b.month == *month))
    }

    /// Replace the lines of `month`'s budget, creating the document if needed
    fn upsert_budget(&self, month: &Month, lines: Vec<BudgetLine>) -> Result<BudgetDoc>;
}

/// Contents of the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub budgets: Vec<BudgetDoc>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Dataset {
    /// The bundled demo dataset
    pub fn sample() -> Result<Self> {
        Ok(serde_json::from_str(SAMPLE_DATA)?)
    }

    pub(crate) fn filter_transactions(&self, filter: &TransactionFilter<'_>) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub(crate) fn upsert_budget(&mut self, month: &Month, lines: Vec<BudgetLine>) -> BudgetDoc {
        match self.budgets.iter_mut().find(|b| b.month == *month) {
            Some(existing) => {
                existing.lines = lines;
                existing.clone()
            }
            None => {
                let doc = BudgetDoc::new(*month, lines);
                self.budgets.push(doc.clone());
                doc
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_sample_dataset_parses() {
        let data = Dataset::sample().unwrap();
        assert!(!data.accounts.is_empty());
        assert!(!data.transactions.is_empty());
        assert!(!data.budgets.is_empty());

        // Every transaction references a known account
        for tx in &data.transactions {
            assert!(
                data.accounts.iter().any(|a| a.id == tx.account_id),
                "unknown account {}",
                tx.account_id
            );
        }
    }

    #[test]
    fn test_empty_file_sections_default() {
        let data: Dataset = serde_json::from_str("{}").unwrap();
        assert_eq!(data, Dataset::default());
    }

    #[test]
    fn test_upsert_budget_replaces_lines_in_place() {
        let mut data = Dataset::default();
        let march: Month = "2024-03".parse().unwrap();
        let april: Month = "2024-04".parse().unwrap();

        data.upsert_budget(
            &march,
            vec![BudgetLine {
                category: Category::Shops,
                monthly_limit: 0.1,
            }],
        );
        data.upsert_budget(&april, vec![]);
        let updated = data.upsert_budget(
            &march,
            vec![BudgetLine {
                category: Category::Travel,
                monthly_limit: 0.3,
            }],
        );

        assert_eq!(data.budgets.len(), 2);
        assert_eq!(data.budgets[0].month, march);
        assert_eq!(updated.id, "b_2024-03");
        assert_eq!(updated.lines[0].category, Category::Travel);
    }
}
