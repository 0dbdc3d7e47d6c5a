//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;

use syncup_core::{BudgetFallback, Dataset, JsonStore, Repository};
use tempfile::TempDir;

use crate::commands::{self, format_amount, truncate};

/// Write the sample data file into a fresh temp dir
fn setup_data_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");
    commands::cmd_init(&path, false).unwrap();
    (dir, path)
}

fn setup_store() -> (TempDir, JsonStore) {
    let (dir, path) = setup_data_file();
    let store = commands::open_store(&path).unwrap();
    (dir, store)
}

// ========== Init Command Tests ==========

#[test]
fn test_cmd_init_writes_sample() {
    let (_dir, path) = setup_data_file();
    let store = JsonStore::open(&path).unwrap();
    let sample = Dataset::sample().unwrap();
    assert_eq!(store.load().unwrap(), sample);
}

#[test]
fn test_cmd_init_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data.json");
    assert!(commands::cmd_init(&path, false).is_ok());
    assert!(path.exists());
}

#[test]
fn test_cmd_init_refuses_existing_file() {
    let (_dir, path) = setup_data_file();
    assert!(commands::cmd_init(&path, false).is_err());
}

#[test]
fn test_cmd_init_force_overwrites() {
    let (_dir, path) = setup_data_file();
    std::fs::write(&path, "{\"budgets\":[],\"accounts\":[],\"transactions\":[]}").unwrap();

    assert!(commands::cmd_init(&path, true).is_ok());
    let store = commands::open_store(&path).unwrap();
    assert_eq!(store.list_accounts().unwrap().len(), 2);
}

#[test]
fn test_open_store_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = commands::open_store(&dir.path().join("missing.json"));
    assert!(result.is_err());
}

// ========== Parsing Helper Tests ==========

#[test]
fn test_parse_month() {
    let month = commands::parse_month(Some("2024-03")).unwrap().unwrap();
    assert_eq!(month.to_string(), "2024-03");
    assert!(commands::parse_month(None).unwrap().is_none());
    assert!(commands::parse_month(Some("2024-3")).is_err());
    assert!(commands::parse_month(Some("2024-13")).is_err());
}

#[test]
fn test_parse_fallback() {
    assert_eq!(
        commands::parse_fallback("first-available").unwrap(),
        BudgetFallback::FirstAvailable
    );
    assert_eq!(commands::parse_fallback("strict").unwrap(), BudgetFallback::Strict);
    assert_eq!(commands::parse_fallback("EMPTY").unwrap(), BudgetFallback::Empty);
    assert!(commands::parse_fallback("nearest").is_err());
}

// ========== Listing Command Tests ==========

#[test]
fn test_cmd_accounts() {
    let (_dir, store) = setup_store();
    assert!(commands::cmd_accounts(&store).is_ok());
}

#[test]
fn test_cmd_transactions_filters() {
    let (_dir, store) = setup_store();
    assert!(commands::cmd_transactions(&store, None, None, None, None).is_ok());
    assert!(commands::cmd_transactions(
        &store,
        Some("acc_credit"),
        Some("Food and Drink"),
        Some("2024-03-01"),
        Some("2024-03-31"),
    )
    .is_ok());
}

#[test]
fn test_cmd_transactions_invalid_args() {
    let (_dir, store) = setup_store();
    assert!(commands::cmd_transactions(&store, None, Some("Groceries"), None, None).is_err());
    assert!(commands::cmd_transactions(&store, None, None, Some("03/01/2024"), None).is_err());
    assert!(commands::cmd_transactions(&store, None, None, None, Some("2024-02-30")).is_err());
}

#[test]
fn test_cmd_budget() {
    let (_dir, store) = setup_store();
    assert!(commands::cmd_budget(&store, None).is_ok());
    assert!(commands::cmd_budget(&store, Some("2024-04")).is_ok());
    // Unknown months fall back to the first budget
    assert!(commands::cmd_budget(&store, Some("2030-01")).is_ok());
    assert!(commands::cmd_budget(&store, Some("March")).is_err());
}

// ========== Insights Command Tests ==========

#[test]
fn test_build_insights_march() {
    let (_dir, store) = setup_store();
    let report = commands::build_insights(&store, Some("2024-03"), "first-available").unwrap();

    assert_eq!(report.month.to_string(), "2024-03");
    assert!((report.income - 4225.0).abs() < 1e-9);
    assert!((report.net - (report.income - report.expenses)).abs() < 1e-9);
    assert!(!report.categories.is_empty());
}

#[test]
fn test_build_insights_strict_missing_month() {
    let (_dir, store) = setup_store();
    assert!(commands::build_insights(&store, Some("2030-01"), "strict").is_err());
    assert!(commands::build_insights(&store, Some("2030-01"), "first-available").is_ok());
}

#[test]
fn test_build_insights_empty_fallback() {
    let (_dir, store) = setup_store();
    let report = commands::build_insights(&store, Some("2030-01"), "empty").unwrap();
    assert!(report.categories.is_empty());
}

#[test]
fn test_cmd_insights_bad_args() {
    let (_dir, store) = setup_store();
    assert!(commands::cmd_insights(&store, Some("2024-03"), "bogus").is_err());
    assert!(commands::cmd_insights(&store, Some("24-03"), "strict").is_err());
    assert!(commands::cmd_insights(&store, None, "first-available").is_ok());
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Blue Bottle Coffee Roasters", 10), "Blue Bo...");
    assert_eq!(truncate("ééééé", 4), "é...");
}

#[test]
fn test_format_amount_pads_before_color() {
    assert_eq!(format_amount(-42.5), "\x1b[31m    $42.50\x1b[0m");
    assert_eq!(format_amount(4200.0), "\x1b[32m  +$4200.00\x1b[0m");

    // Visible width is the same regardless of color codes
    let visible = |s: &str| {
        s.replace("\x1b[31m", "")
            .replace("\x1b[32m", "")
            .replace("\x1b[0m", "")
    };
    assert_eq!(visible(&format_amount(-3.0)).len(), 10);
    assert_eq!(visible(&format_amount(1234.56)).len(), 10);
}
