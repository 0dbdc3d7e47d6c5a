//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::query_params;
use crate::{AppError, AppState};
use syncup_core::{InsightReport, Month};

/// Query parameters for the insight report
#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    /// Month key (YYYY-MM); defaults to the current UTC month
    pub month: Option<String>,
}

/// GET /v1/insights - Monthly income/expense totals and budget utilization
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    query: Result<Query<InsightQuery>, QueryRejection>,
) -> Result<Json<InsightReport>, AppError> {
    let params = query_params(query)?;
    let month = match params.month.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => s.parse::<Month>()?,
        None => Month::current()?,
    };

    let report = state.engine.report(state.store.as_ref(), &month)?;

    Ok(Json(report))
}
