//! Server command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::{open_store, parse_fallback};

pub async fn cmd_serve(
    data_path: &Path,
    host: &str,
    port: u16,
    require_auth: bool,
    budget_fallback: &str,
) -> Result<()> {
    let budget_fallback = parse_fallback(budget_fallback)?;
    let store = open_store(data_path)?;

    println!("🚀 Starting SyncUp API server...");
    println!("   Data file: {}", data_path.display());
    println!("   Listening: http://{}:{}/v1", host, port);
    println!("   Budget fallback: {}", budget_fallback);

    let demo_token = std::env::var("SYNCUP_DEMO_TOKEN")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| syncup_server::DEFAULT_DEMO_TOKEN.to_string());

    // Parse allowed CORS origins (comma-separated)
    let allowed_origins: Vec<String> = std::env::var("SYNCUP_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if require_auth {
        println!("   🔒 Authentication: demo bearer token (SYNCUP_DEMO_TOKEN)");
    } else {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    }
    if !allowed_origins.is_empty() {
        println!("   🌐 CORS origins: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = syncup_server::ServerConfig {
        require_auth,
        demo_token,
        allowed_origins,
        budget_fallback,
    };

    syncup_server::serve(Arc::new(store), host, port, config).await
}
