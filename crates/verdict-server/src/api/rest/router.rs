//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use verdict_sdk::RuleEngine;

/// Create REST API router with permissive CORS
pub fn create_router(engine: Arc<RuleEngine>) -> Router {
    create_router_with_cors(engine, true)
}

/// Create REST API router; without permissive CORS only same-origin
/// browsers can call it
pub fn create_router_with_cors(engine: Arc<RuleEngine>, cors_permissive: bool) -> Router {
    let state = AppState { engine };

    let router = Router::new()
        .route("/health", get(health))
        .route("/create_rule", post(create_rule))
        .route("/combine_rules", post(combine_rules))
        .route("/evaluate_rule", post(evaluate_rule))
        .with_state(state);

    let router = if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
