//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use teller_core::CoreError;

/// Errors that can occur while serving requests or starting the gateway.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Validation or id assignment failed in the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The requested account does not exist in the store.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The database pool could not be set up.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A configuration value is missing or malformed.
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: &'static str, reason: String },

    /// Binding or serving the listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Core(CoreError::NameRequired | CoreError::NegativeBalance) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
