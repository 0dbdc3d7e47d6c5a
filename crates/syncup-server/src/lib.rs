//! SyncUp Web Server
//!
//! Axum-based REST API for the SyncUp personal finance demo backend.
//! All routes live under `/v1`.
//!
//! - Demo bearer-token authentication (off by default, `/v1/health` always open)
//! - Open CORS policy unless origins are configured
//! - Request tracing
//! - Sanitized JSON error responses

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use syncup_core::{BudgetFallback, InsightEngine, Repository};

mod handlers;

/// Maximum accepted request body size (64 KB)
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Token accepted when no other demo token is configured
pub const DEFAULT_DEMO_TOKEN: &str = "syncup-demo-token";

/// Authorization header for bearer-token auth
const AUTHORIZATION_HEADER: &str = "authorization";

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Whether requests must carry the demo bearer token
    pub require_auth: bool,
    /// Token expected in `Authorization: Bearer <token>`
    pub demo_token: String,
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
    /// Budget lookup policy for months without their own budget
    pub budget_fallback: BudgetFallback,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: false,
            demo_token: DEFAULT_DEMO_TOKEN.to_string(),
            allowed_origins: vec![],
            budget_fallback: BudgetFallback::default(),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn Repository>,
    pub config: ServerConfig,
    pub engine: InsightEngine,
}

/// Demo authentication middleware
///
/// Passes everything through unless `require_auth` is set. Otherwise the
/// request needs `Authorization: Bearer <demo_token>`, compared in constant
/// time.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth {
        return next.run(request).await;
    }

    let token_valid = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|token| validate_token(token, &state.config.demo_token))
        .unwrap_or(false);

    if token_valid {
        return next.run(request).await;
    }

    warn!(path = %request.uri().path(), "Unauthorized request - no valid token");
    AppError::unauthorized("Unauthorized").into_response()
}

/// Compare a provided token against the expected one in constant time
fn validate_token(provided: &str, expected: &str) -> bool {
    use subtle::ConstantTimeEq;

    let provided_bytes = provided.as_bytes();
    let expected_bytes = expected.as_bytes();

    // Only compare if lengths match (constant-time for same-length tokens)
    provided_bytes.len() == expected_bytes.len() && provided_bytes.ct_eq(expected_bytes).into()
}

/// Parse configured CORS origins, skipping entries that aren't valid header values
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() && !origins.is_empty() {
        warn!("No valid CORS origins configured; cross-origin requests will be rejected");
    }
    parsed
}

/// Create the application router
pub fn create_router(store: Arc<dyn Repository>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        engine: InsightEngine::new(config.budget_fallback),
        config: config.clone(),
    });

    let protected = Router::new()
        .route("/accounts", get(handlers::list_accounts))
        .route("/transactions", get(handlers::list_transactions))
        .route(
            "/budgets",
            get(handlers::get_budget).put(handlers::set_budget),
        )
        .route("/insights", get(handlers::get_insights))
        .route(
            "/plaid/link/token/create",
            post(handlers::create_link_token),
        )
        .route(
            "/plaid/item/public_token/exchange",
            post(handlers::exchange_public_token),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected);

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    let cors = if config.allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(parse_origins(&config.allowed_origins))
    };

    Router::new()
        .nest("/v1", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(
    store: Arc<dyn Repository>,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.require_auth {
        info!("Demo token authentication enabled");
    } else {
        warn!("⚠️  Authentication disabled - do not expose to network!");
    }
    info!(fallback = %config.budget_fallback, "Budget fallback policy");

    let app = create_router(store, config);
    let addr = format!("{}:{}", host, port);

    info!("SyncUp API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn unauthorized(msg: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Caller mistakes and missing data are reported as-is
        match err.downcast_ref::<syncup_core::Error>() {
            Some(
                syncup_core::Error::InvalidMonth(_) | syncup_core::Error::InvalidData(_),
            ) => return Self::bad_request(&err.to_string()),
            Some(syncup_core::Error::NotFound(_)) => return Self::not_found(&err.to_string()),
            _ => {}
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "Internal Server Error".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
