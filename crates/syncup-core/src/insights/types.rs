//! Report types produced by the insights engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Category;
use crate::month::Month;

/// How close a category is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Under 60% of the limit
    Good,
    /// 60% up to (not including) 80%
    Moderate,
    /// 80% up to and including 100%
    Warning,
    /// Over the limit
    Over,
}

impl BudgetStatus {
    /// Classify a usage percentage
    pub fn from_usage_pct(usage_pct: f64) -> Self {
        if usage_pct < 60.0 {
            BudgetStatus::Good
        } else if usage_pct < 80.0 {
            BudgetStatus::Moderate
        } else if usage_pct <= 100.0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Over
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Good => "good",
            BudgetStatus::Moderate => "moderate",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Over => "over",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(BudgetStatus::Good),
            "moderate" => Ok(BudgetStatus::Moderate),
            "warning" => Ok(BudgetStatus::Warning),
            "over" => Ok(BudgetStatus::Over),
            _ => Err(format!("Unknown budget status: {}", s)),
        }
    }
}

/// Budget utilization for one budget line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInsight {
    pub category: Category,
    /// Sum of expense magnitudes in this category
    pub spent: f64,
    /// `income * monthlyLimit`
    pub limit: f64,
    /// `spent / limit * 100`, or 0 when the limit is 0
    pub usage_pct: f64,
    pub status: BudgetStatus,
    /// Number of transactions in this category (income and expense)
    pub count: usize,
}

/// Monthly summary of income, expenses, and budget utilization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub month: Month,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    /// One entry per budget line, highest spend first
    pub categories: Vec<CategoryInsight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(BudgetStatus::from_usage_pct(0.0), BudgetStatus::Good);
        assert_eq!(BudgetStatus::from_usage_pct(59.99), BudgetStatus::Good);
        assert_eq!(BudgetStatus::from_usage_pct(60.0), BudgetStatus::Moderate);
        assert_eq!(BudgetStatus::from_usage_pct(79.99), BudgetStatus::Moderate);
        assert_eq!(BudgetStatus::from_usage_pct(80.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_usage_pct(100.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_usage_pct(100.01), BudgetStatus::Over);
    }

    #[test]
    fn test_status_strings() {
        for status in [
            BudgetStatus::Good,
            BudgetStatus::Moderate,
            BudgetStatus::Warning,
            BudgetStatus::Over,
        ] {
            assert_eq!(status.as_str().parse::<BudgetStatus>().unwrap(), status);
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status)
            );
        }
    }

    #[test]
    fn test_category_insight_field_names() {
        let insight = CategoryInsight {
            category: Category::Shops,
            spent: 10.0,
            limit: 100.0,
            usage_pct: 10.0,
            status: BudgetStatus::Good,
            count: 2,
        };
        let value = serde_json::to_value(&insight).unwrap();
        assert_eq!(value["usagePct"], 10.0);
        assert_eq!(value["category"], "Shops");
        assert_eq!(value["status"], "good");
    }
}
