//! Account handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::{AppError, AppState};
use syncup_core::models::Account;

/// GET /v1/accounts - List all accounts
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.list_accounts()?;

    debug!(count = accounts.len(), "Listed accounts");

    Ok(Json(accounts))
}
