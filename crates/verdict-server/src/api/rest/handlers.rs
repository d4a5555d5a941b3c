//! API endpoint handlers
//!
//! Rule operations are CPU-only and bounded by the engine's limits, so
//! handlers call the engine directly.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use tracing::info;
use verdict_sdk::SdkError;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Parse rule text into a tree
pub(super) async fn create_rule(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateRuleRequest>,
) -> Result<Json<AstResponse>, ServerError> {
    info!("Received create_rule request ({} bytes)", payload.rule.len());

    let ast = state.engine.create_rule(&payload.rule)?;
    Ok(Json(AstResponse { ast }))
}

/// Combine trees or rule texts into one tree
pub(super) async fn combine_rules(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CombineRulesRequest>,
) -> Result<Json<AstResponse>, ServerError> {
    info!("Received combine_rules request with {} rules", payload.rules.len());

    let sources = payload.into_sources().map_err(SdkError::from)?;
    let ast = state.engine.combine_sources(sources)?;
    Ok(Json(AstResponse { ast }))
}

/// Evaluate a tree against a record
pub(super) async fn evaluate_rule(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<EvaluateRuleRequest>,
) -> Result<Json<EvaluateRuleResponse>, ServerError> {
    info!(
        "Received evaluate_rule request with {} data fields",
        payload.data.len()
    );

    let result = state.engine.evaluate_rule(&payload.ast, &payload.data)?;
    Ok(Json(EvaluateRuleResponse { result }))
}
