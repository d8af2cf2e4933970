//! API error types and conversions
//!
//! Every error leaves the gateway as HTTP 200 with a body of the form
//! `{"Error": "<message>"}`. The kind is only visible in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vgw_core::GatewayError;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// The vehicle or the command set does not support what was asked
    Unsupported(String),
    /// The provider could not be reached or answered unexpectedly
    Upstream(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unsupported(msg) | ApiError::Upstream(msg) => msg,
        }
    }
}

/// Wire shape for every error
#[derive(Serialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Unsupported(msg) => {
                tracing::debug!(%msg, "Request not supported");
                msg
            }
            ApiError::Upstream(msg) => {
                tracing::error!(%msg, "Provider error");
                msg
            }
        };

        (StatusCode::OK, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        if err.is_domain_rejection() {
            ApiError::Unsupported(err.to_string())
        } else {
            ApiError::Upstream(err.to_string())
        }
    }
}
