//! Engine start/stop handler

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::header;
use axum::{Form, Json};
use serde::Deserialize;
use vgw_core::routing::vehicle_id_from_path;
use vgw_core::EngineResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the engine route
#[derive(Debug, Default, Deserialize)]
pub struct EngineCommandRequest {
    /// "START" or "STOP"
    #[serde(default)]
    pub action: Option<String>,
}

/// Engine command extracted from either a JSON or a form-encoded body.
///
/// Never rejects: an unreadable body yields no action, which the backend
/// then refuses like any other unsupported action.
#[derive(Debug, Default)]
pub struct EngineCommand {
    pub action: Option<String>,
}

impl<S> FromRequest<S> for EngineCommand
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            Form::<EngineCommandRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .ok()
        } else {
            // JSON is accepted with or without a content-type header
            Bytes::from_request(req, state)
                .await
                .ok()
                .and_then(|bytes| serde_json::from_slice::<EngineCommandRequest>(&bytes).ok())
        };

        Ok(Self {
            action: body.and_then(|b| b.action),
        })
    }
}

/// POST /vehicles/:vehicle_id/engine
///
/// Body: `{"action": "START" | "STOP"}` as JSON or form data.
pub async fn post_engine(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    command: EngineCommand,
) -> Result<Json<EngineResult>, ApiError> {
    let action = command.action.unwrap_or_default();
    let result = state
        .backend()
        .engine(vehicle_id_from_path(&vehicle_id), &action)
        .await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract(content_type: Option<&str>, body: &'static str) -> EngineCommand {
        let mut builder = Request::builder().method("POST").uri("/vehicles/1234/engine");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        EngineCommand::from_request(req, &()).await.unwrap()
    }

    #[tokio::test]
    async fn json_body() {
        let cmd = extract(Some("application/json"), r#"{"action":"START"}"#).await;
        assert_eq!(cmd.action.as_deref(), Some("START"));
    }

    #[tokio::test]
    async fn json_without_content_type() {
        let cmd = extract(None, r#"{"action":"STOP"}"#).await;
        assert_eq!(cmd.action.as_deref(), Some("STOP"));
    }

    #[tokio::test]
    async fn form_body() {
        let cmd = extract(Some("application/x-www-form-urlencoded"), "action=STOP").await;
        assert_eq!(cmd.action.as_deref(), Some("STOP"));
    }

    #[tokio::test]
    async fn unreadable_bodies_yield_no_action() {
        assert!(extract(Some("application/json"), "{not json").await.action.is_none());
        assert!(extract(Some("application/json"), "").await.action.is_none());
        assert!(extract(Some("application/json"), r#"{"action":1}"#).await.action.is_none());
        assert!(extract(Some("text/plain"), "START").await.action.is_none());
    }
}
