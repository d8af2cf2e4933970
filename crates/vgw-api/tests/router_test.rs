//! Router tests against a mock backend
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`, checking
//! how each backend outcome is rendered on the wire.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tower::ServiceExt;
use vgw_api::{create_router, AppState};
use vgw_core::{
    DoorEntry, EnergyKind, EnergyLevel, EngineResult, GatewayError, GatewayResult,
    VehicleBackend, VehicleInfo,
};

// =============================================================================
// Mock Backend
// =============================================================================

/// Mock backend with one fixed outcome per route
#[derive(Default)]
struct MockBackend {
    /// (method, vehicle id) pairs in call order
    calls: Mutex<Vec<(String, String)>>,
}

impl MockBackend {
    fn record(&self, method: &str, vehicle_id: &str) {
        self.calls
            .lock()
            .push((method.to_string(), vehicle_id.to_string()));
    }
}

#[async_trait]
impl VehicleBackend for MockBackend {
    async fn vehicle_info(&self, vehicle_id: &str) -> GatewayResult<VehicleInfo> {
        self.record("vehicle_info", vehicle_id);
        Err(GatewayError::Transport("connection refused".to_string()))
    }

    async fn doors(&self, vehicle_id: &str) -> GatewayResult<Vec<DoorEntry>> {
        self.record("doors", vehicle_id);
        Err(GatewayError::schema("missing field `doors`"))
    }

    async fn energy(&self, vehicle_id: &str, kind: EnergyKind) -> GatewayResult<EnergyLevel> {
        self.record(kind.as_str(), vehicle_id);
        match kind {
            EnergyKind::Fuel => Ok(EnergyLevel::new("55")),
            EnergyKind::Battery => Err(GatewayError::UnsupportedEnergy(kind)),
        }
    }

    async fn engine(&self, vehicle_id: &str, action: &str) -> GatewayResult<EngineResult> {
        self.record("engine", vehicle_id);
        action.parse::<vgw_core::EngineAction>()?;
        Ok(EngineResult::success())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

async fn call(backend: Arc<MockBackend>, request: Request<Body>) -> (StatusCode, Value) {
    let router = create_router(AppState::new(backend));
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_transport_error_is_200_error_object() {
    let (status, body) = call(Arc::default(), get("/vehicles/1234")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Error": "Transport error: connection refused" }));
}

#[tokio::test]
async fn test_schema_error_is_200_error_object() {
    let (status, body) = call(Arc::default(), get("/vehicles/1234/doors")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "Error": "Unexpected provider response: missing field `doors`" })
    );
}

#[tokio::test]
async fn test_energy_routes_pick_kind() {
    let backend = Arc::new(MockBackend::default());

    let (_, fuel) = call(backend.clone(), get("/vehicles/7/fuel")).await;
    assert_eq!(fuel, json!({ "percentage": "55" }));

    let (status, battery) = call(backend.clone(), get("/vehicles/7/battery")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(battery, json!({ "Error": "This vehicle runs on battery" }));

    assert_eq!(
        backend.calls.lock().clone(),
        vec![
            ("fuel".to_string(), "7".to_string()),
            ("battery".to_string(), "7".to_string())
        ]
    );
}

#[tokio::test]
async fn test_engine_without_body_is_unsupported() {
    let request = Request::builder()
        .method("POST")
        .uri("/vehicles/1234/engine")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(Arc::default(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Error": "This action is not supported." }));
}

#[tokio::test]
async fn test_engine_json_body() {
    let backend = Arc::new(MockBackend::default());
    let request = Request::builder()
        .method("POST")
        .uri("/vehicles/:42/engine")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"action":"START"}"#))
        .unwrap();

    let (_, body) = call(backend.clone(), request).await;
    assert_eq!(body, json!({ "status": "success" }));
    assert_eq!(
        backend.calls.lock().clone(),
        vec![("engine".to_string(), "42".to_string())]
    );
}
