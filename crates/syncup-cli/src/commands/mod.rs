//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_store, argument parsing) and `init`
//! - `serve` - Web server command
//! - `accounts` - Account listing
//! - `transactions` - Transaction listing with filters
//! - `budget` - Budget display
//! - `insights` - Monthly insight report

pub mod accounts;
pub mod budget;
pub mod core;
pub mod insights;
pub mod serve;
pub mod transactions;

// Re-export command functions for main.rs
pub use accounts::*;
pub use budget::*;
pub use core::*;
pub use insights::*;
pub use serve::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
