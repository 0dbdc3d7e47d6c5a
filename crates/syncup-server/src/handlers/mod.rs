//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod accounts;
pub mod budgets;
pub mod health;
pub mod insights;
pub mod link;
pub mod transactions;

// Re-export all handlers for use in router
pub use accounts::*;
pub use budgets::*;
pub use health::*;
pub use insights::*;
pub use link::*;
pub use transactions::*;

use axum::extract::{rejection::QueryRejection, Query, Request};
use serde::de::DeserializeOwned;

use crate::{AppError, MAX_BODY_SIZE};

/// Read a JSON request body, treating an empty body as `T::default()`
pub(crate) async fn read_json_or_default<T>(request: Request) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))
}

/// Unwrap query parameters, reporting a malformed query string as a JSON 400
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::bad_request(&rejection.body_text()))
}
