//! Mock bank-link handlers (Plaid-style)

use axum::{extract::Request, Json};
use serde::Deserialize;
use tracing::info;

use super::read_json_or_default;
use crate::AppError;
use syncup_core::link::{self, AccessToken, LinkToken};

/// Request body for creating a link token
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkTokenRequest {
    pub user_id: Option<String>,
}

/// Request body for exchanging a public token
#[derive(Debug, Default, Deserialize)]
pub struct ExchangeTokenRequest {
    pub public_token: Option<String>,
}

/// POST /v1/plaid/link/token/create - Issue a mock link token
pub async fn create_link_token(request: Request) -> Result<Json<LinkToken>, AppError> {
    let req: CreateLinkTokenRequest = read_json_or_default(request).await?;
    let user_id = req.user_id.as_deref().unwrap_or("demo");

    let token = link::create_link_token(user_id);
    info!(user = user_id, "Issued link token");

    Ok(Json(token))
}

/// POST /v1/plaid/item/public_token/exchange - Exchange a public token
pub async fn exchange_public_token(request: Request) -> Result<Json<AccessToken>, AppError> {
    let req: ExchangeTokenRequest = read_json_or_default(request).await?;

    let public_token = req
        .public_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::bad_request("public_token required"))?;

    Ok(Json(link::exchange_public_token(&public_token)?))
}
