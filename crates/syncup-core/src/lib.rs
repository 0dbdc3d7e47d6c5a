//! SyncUp Core Library
//!
//! Shared functionality for the SyncUp personal finance demo backend:
//! - Domain models (accounts, transactions, budgets) and the `YYYY-MM` month key
//! - Repository trait with a flat JSON file store and an in-memory store
//! - Insights engine for monthly budget utilization
//! - Budget lookup/update service
//! - Mock bank-link token service

pub mod budget;
pub mod error;
pub mod insights;
pub mod link;
pub mod models;
pub mod month;
pub mod store;

pub use error::{Error, Result};
pub use insights::{BudgetFallback, InsightEngine, InsightReport};
pub use month::Month;
pub use store::{Dataset, JsonStore, MemoryStore, Repository, TransactionFilter};
