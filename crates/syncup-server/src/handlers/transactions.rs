//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use super::query_params;
use crate::{AppError, AppState};
use syncup_core::models::{Category, Transaction};
use syncup_core::TransactionFilter;

/// Query parameters for listing transactions
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Filter by account ID (exact match)
    pub account_id: Option<String>,
    /// Filter by category label (e.g. "Food and Drink")
    pub category: Option<String>,
    /// Inclusive start date (YYYY-MM-DD)
    pub from: Option<String>,
    /// Inclusive end date (YYYY-MM-DD)
    pub to: Option<String>,
}

/// Parse an optional YYYY-MM-DD query value
fn parse_date(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>, AppError> {
    value
        .filter(|s| !s.is_empty())
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                AppError::bad_request(&format!("Invalid {} date format (use YYYY-MM-DD)", name))
            })
        })
        .transpose()
}

/// GET /v1/transactions - List transactions, optionally filtered
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let params = query_params(query)?;
    let category = params
        .category
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Category>())
        .transpose()
        .map_err(|e| AppError::bad_request(&e))?;
    let from = parse_date(params.from.as_deref(), "from")?;
    let to = parse_date(params.to.as_deref(), "to")?;

    let filter = TransactionFilter::new()
        .account_id(params.account_id.as_deref().filter(|s| !s.is_empty()))
        .category(category)
        .from_date(from)
        .to_date(to);

    let transactions = state.store.list_transactions(&filter)?;

    debug!(
        account_id = ?params.account_id,
        category = ?params.category,
        from = ?params.from,
        to = ?params.to,
        returned = transactions.len(),
        "Listed transactions"
    );

    Ok(Json(transactions))
}
