//! In-memory store

use std::sync::RwLock;

use super::{Dataset, Repository, TransactionFilter};
use crate::error::Result;
use crate::models::{Account, BudgetDoc, BudgetLine, Transaction};
use crate::month::Month;

/// Store holding a dataset in memory (tests and demos)
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Dataset>,
}

impl MemoryStore {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Copy of the current dataset
    pub fn snapshot(&self) -> Dataset {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Dataset> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Repository for MemoryStore {
    fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.read().accounts.clone())
    }

    fn list_transactions(&self, filter: &TransactionFilter<'_>) -> Result<Vec<Transaction>> {
        Ok(self.read().filter_transactions(filter))
    }

    fn list_budgets(&self) -> Result<Vec<BudgetDoc>> {
        Ok(self.read().budgets.clone())
    }

    fn upsert_budget(&self, month: &Month, lines: Vec<BudgetLine>) -> Result<BudgetDoc> {
        let mut data = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(data.upsert_budget(month, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new(Dataset::sample().unwrap());
        let filter = TransactionFilter::new().category(Some(Category::FoodAndDrink));

        let food = store.list_transactions(&filter).unwrap();
        assert!(!food.is_empty());
        assert!(food.iter().all(|t| t.category == Category::FoodAndDrink));

        let month: Month = "2030-01".parse().unwrap();
        assert!(store.find_budget_by_month(&month).unwrap().is_none());
        store.upsert_budget(&month, vec![]).unwrap();
        assert!(store.find_budget_by_month(&month).unwrap().is_some());
    }
}
