//! Budget handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, Request, State},
    Json,
};
use serde::Deserialize;

use super::query_params;
use crate::{AppError, AppState, MAX_BODY_SIZE};
use syncup_core::budget;
use syncup_core::models::{BudgetDoc, BudgetLine};
use syncup_core::Month;

/// Query parameters for fetching a budget
#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    /// Month key (YYYY-MM); omitted = first stored budget
    pub month: Option<String>,
}

/// Request body for replacing a month's budget
#[derive(Debug, Deserialize)]
pub struct SetBudgetRequest {
    pub month: String,
    pub lines: Vec<BudgetLine>,
}

/// GET /v1/budgets - Get the budget for a month
///
/// Falls back to the first stored budget when the month has none.
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BudgetQuery>, QueryRejection>,
) -> Result<Json<BudgetDoc>, AppError> {
    let params = query_params(query)?;
    let month = params
        .month
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Month>())
        .transpose()?;

    let doc = budget::get_budget(state.store.as_ref(), month.as_ref())?;

    Ok(Json(doc))
}

/// PUT /v1/budgets - Create or replace a month's budget
pub async fn set_budget(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<BudgetDoc>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: SetBudgetRequest = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))?;

    let month: Month = req.month.parse()?;
    let doc = budget::set_budget(state.store.as_ref(), &month, req.lines)?;

    Ok(Json(doc))
}
