//! Domain models for SyncUp
//!
//! Field names follow the camelCase layout of the JSON data file and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A linked bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Last four digits shown to the user
    pub mask: String,
    pub current_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

/// Account types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Credit => "credit",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed set of transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food and Drink")]
    FoodAndDrink,
    Shops,
    Recreation,
    Travel,
    Service,
    Transportation,
    Healthcare,
    Entertainment,
    Education,
    Utilities,
    Insurance,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Other,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Self::FoodAndDrink,
        Self::Shops,
        Self::Recreation,
        Self::Travel,
        Self::Service,
        Self::Transportation,
        Self::Healthcare,
        Self::Entertainment,
        Self::Education,
        Self::Utilities,
        Self::Insurance,
        Self::PersonalCare,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Food and Drink",
            Self::Shops => "Shops",
            Self::Recreation => "Recreation",
            Self::Travel => "Travel",
            Self::Service => "Service",
            Self::Transportation => "Transportation",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::PersonalCare => "Personal Care",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// Negative = expense, positive = income
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Spending limit for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: Category,
    /// Fraction of the month's income (0..=1)
    pub monthly_limit: f64,
}

/// A month's budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDoc {
    pub id: String,
    pub month: Month,
    pub lines: Vec<BudgetLine>,
}

impl BudgetDoc {
    pub fn new(month: Month, lines: Vec<BudgetLine>) -> Self {
        Self {
            id: format!("b_{}", month),
            month,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::FoodAndDrink).unwrap();
        assert_eq!(json, "\"Food and Drink\"");
        assert!(serde_json::from_str::<Category>("\"food\"").is_err());
    }

    #[test]
    fn test_transaction_camel_case_fields() {
        let json = r#"{
            "id": "t1",
            "accountId": "acc_1",
            "amount": -12.5,
            "category": "Personal Care",
            "date": "2024-03-05"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.account_id, "acc_1");
        assert_eq!(tx.category, Category::PersonalCare);
        assert!(tx.merchant.is_none());

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["accountId"], "acc_1");
        assert!(value.get("merchant").is_none());
    }

    #[test]
    fn test_account_type_display_matches_serde() {
        for kind in [AccountType::Checking, AccountType::Savings, AccountType::Credit] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        assert_eq!(AccountType::Credit.to_string(), "credit");
    }

    #[test]
    fn test_account_type_field() {
        let json = r#"{
            "id": "acc_1",
            "name": "Everyday Checking",
            "type": "checking",
            "mask": "1234",
            "currentBalance": 1520.25
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Checking);
        assert_eq!(serde_json::to_value(&account).unwrap()["type"], "checking");
    }

    #[test]
    fn test_budget_doc_id() {
        let doc = BudgetDoc::new("2024-03".parse().unwrap(), vec![]);
        assert_eq!(doc.id, "b_2024-03");
    }
}
