//! Insights - monthly budget utilization
//!
//! Aggregates a month's transactions into income, expense, and net totals,
//! and compares per-category spend against the month's budget lines. Each
//! line's limit is a fraction of the month's income.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use syncup_core::insights::{BudgetFallback, InsightEngine};
//!
//! let engine = InsightEngine::new(BudgetFallback::FirstAvailable);
//! let report = engine.report(&store, &"2024-03".parse()?)?;
//! ```
//!
//! [`calculate_insights`] is the pure computation; [`InsightEngine`] adds
//! budget lookup through a [`Repository`](crate::store::Repository).

pub mod engine;
pub mod types;

pub use engine::{calculate_insights, BudgetFallback, InsightEngine};
pub use types::{BudgetStatus, CategoryInsight, InsightReport};
