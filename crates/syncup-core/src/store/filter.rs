//! Transaction filter builder
//!
//! All criteria are optional and combined with AND. Date bounds are
//! inclusive.

use chrono::NaiveDate;

use crate::models::{Category, Transaction};

/// Builder for transaction list queries
///
/// The lifetime `'query` is how long borrowed parameters (the account id)
/// must remain valid.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionFilter<'query> {
    pub account_id: Option<&'query str>,
    pub category: Option<Category>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl<'query> TransactionFilter<'query> {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set account_id filter (exact match)
    pub fn account_id(mut self, id: Option<&'query str>) -> Self {
        self.account_id = id;
        self
    }

    /// Set category filter
    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Set inclusive lower date bound
    pub fn from_date(mut self, date: Option<NaiveDate>) -> Self {
        self.from = date;
        self
    }

    /// Set inclusive upper date bound
    pub fn to_date(mut self, date: Option<NaiveDate>) -> Self {
        self.to = date;
        self
    }

    /// Whether `tx` satisfies every criterion that is set
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(account_id) = self.account_id {
            if tx.account_id != account_id {
                return false;
            }
        }
        if let Some(category) = self.category {
            if tx.category != category {
                return false;
            }
        }
        if let Some(from) = self.from {
            if tx.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if tx.date > to {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(account_id: &str, category: Category, date: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}", account_id, date),
            account_id: account_id.to_string(),
            amount: -10.0,
            merchant: None,
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            pending: None,
            note: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = TransactionFilter::new();
        assert!(filter.matches(&tx("a", Category::Other, "2024-01-01")));
    }

    #[test]
    fn test_account_and_category() {
        let filter = TransactionFilter::new()
            .account_id(Some("a"))
            .category(Some(Category::Travel));

        assert!(filter.matches(&tx("a", Category::Travel, "2024-01-01")));
        assert!(!filter.matches(&tx("b", Category::Travel, "2024-01-01")));
        assert!(!filter.matches(&tx("a", Category::Shops, "2024-01-01")));
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let filter = TransactionFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2024, 3, 1))
            .to_date(NaiveDate::from_ymd_opt(2024, 3, 31));

        assert!(filter.matches(&tx("a", Category::Other, "2024-03-01")));
        assert!(filter.matches(&tx("a", Category::Other, "2024-03-31")));
        assert!(!filter.matches(&tx("a", Category::Other, "2024-02-29")));
        assert!(!filter.matches(&tx("a", Category::Other, "2024-04-01")));
    }
}
