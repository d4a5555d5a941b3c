//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use verdict_sdk::{ErrorKind, SdkError};

/// Server error type
#[derive(Error, Debug)]
pub enum ServerError {
    /// Rule engine rejected the request
    #[error("{0}")]
    Engine(#[from] SdkError),

    /// Request body could not be read as the expected JSON
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Engine(e) if e.kind() == ErrorKind::Config => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Engine(_) | ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ServerError::Engine(e) => {
                tracing::warn!(kind = %e.kind(), "Request rejected: {}", e);
                json!({
                    "error": e.to_string(),
                    "kind": e.kind(),
                    "status": status.as_u16(),
                })
            }
            ServerError::InvalidRequest(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                json!({
                    "error": msg,
                    "status": status.as_u16(),
                })
            }
            ServerError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                json!({
                    "error": msg,
                    "status": status.as_u16(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
