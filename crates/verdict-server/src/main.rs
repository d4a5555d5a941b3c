//! Verdict Rule Engine HTTP Server
//!
//! Provides REST API for creating, combining and evaluating rules.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verdict_sdk::RuleEngineBuilder;
use verdict_server::api;
use verdict_server::config::{LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize rule engine
    let engine = RuleEngineBuilder::new()
        .with_config(config.engine.clone())
        .build()?;
    info!("Rule engine initialized");

    let app = api::create_router_with_cors(Arc::new(engine), config.cors_permissive);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Create rule: POST http://{}/create_rule", addr);
    info!("  Combine rules: POST http://{}/combine_rules", addr);
    info!("  Evaluate rule: POST http://{}/evaluate_rule", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.default_log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
