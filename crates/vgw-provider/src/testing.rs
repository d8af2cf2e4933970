//! Test utilities for the provider integration
//!
//! - [`StaticTransport`]: in-memory [`ProviderTransport`] that records calls
//! - [`FakeProvider`]: the same canned replies served over real HTTP
//! - [`TestServer`]: runs any axum router on an ephemeral port

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::client::ProviderTransport;
use crate::config::ProviderConfig;
use crate::envelope::ProviderRequest;
use crate::error::ProviderResult;

use self::fixtures::FixtureSet;

/// One request as seen by a fake provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub service: String,
    pub request: ProviderRequest,
}

// =============================================================================
// Fixtures
// =============================================================================

/// Canned provider replies for the two reference vehicles.
///
/// `1234` is a gasoline V8 sedan, `1235` an electric coupe. Any other
/// vehicle gets the provider's "not found" envelope.
pub mod fixtures {
    use std::collections::HashMap;

    use serde_json::{json, Value};

    use crate::config::ServicePaths;

    pub const TANK_LEVEL_1234: &str = "30.2";
    pub const BATTERY_LEVEL_1235: &str = "73.2";

    /// Replies keyed by (service path, vehicle id)
    #[derive(Debug, Clone, Default)]
    pub struct FixtureSet {
        replies: HashMap<(String, String), Value>,
    }

    impl FixtureSet {
        pub fn empty() -> Self {
            Self::default()
        }

        /// Replies for vehicles `1234` and `1235` on the default service paths
        pub fn standard() -> Self {
            let services = ServicePaths::default();
            let mut set = Self::empty();

            set.insert(
                &services.vehicle_info,
                "1234",
                vehicle_info_reply("123123412412", "Metallic Silver", "True", "v8"),
            );
            set.insert(
                &services.vehicle_info,
                "1235",
                vehicle_info_reply("1235AZ91XP", "Forest Green", "False", "electric"),
            );
            set.insert(
                &services.security_status,
                "1234",
                security_reply(&[("frontLeft", "False"), ("frontRight", "True")]),
            );
            set.insert(
                &services.security_status,
                "1235",
                security_reply(&[("frontLeft", "True"), ("frontRight", "False")]),
            );
            set.insert(&services.energy, "1234", energy_reply(TANK_LEVEL_1234, "null"));
            set.insert(&services.energy, "1235", energy_reply("null", BATTERY_LEVEL_1235));
            set.insert(&services.engine_action, "1234", engine_reply("EXECUTED"));
            set.insert(&services.engine_action, "1235", engine_reply("FAILED"));

            set
        }

        pub fn insert(&mut self, service: &str, vehicle_id: &str, reply: Value) {
            self.replies
                .insert((service.to_string(), vehicle_id.to_string()), reply);
        }

        /// Reply for a request, or the provider's 404 envelope
        pub fn reply(&self, service: &str, vehicle_id: &str) -> Value {
            self.replies
                .get(&(service.to_string(), vehicle_id.to_string()))
                .cloned()
                .unwrap_or_else(|| not_found_reply(vehicle_id))
        }
    }

    fn leaf(kind: &str, value: &str) -> Value {
        json!({ "type": kind, "value": value })
    }

    pub fn vehicle_info_reply(
        vin: &str,
        color: &str,
        four_door_sedan: &str,
        drive_train: &str,
    ) -> Value {
        let two_door = if four_door_sedan == "True" { "False" } else { "True" };
        json!({
            "service": "getVehicleInfo",
            "status": "200",
            "data": {
                "vin": leaf("String", vin),
                "color": leaf("String", color),
                "fourDoorSedan": leaf("Boolean", four_door_sedan),
                "twoDoorCoupe": leaf("Boolean", two_door),
                "driveTrain": leaf("String", drive_train)
            }
        })
    }

    pub fn security_reply(doors: &[(&str, &str)]) -> Value {
        let values: Vec<Value> = doors
            .iter()
            .map(|(location, locked)| {
                json!({
                    "location": leaf("String", location),
                    "locked": leaf("Boolean", locked)
                })
            })
            .collect();
        json!({
            "service": "getSecurityStatus",
            "status": "200",
            "data": { "doors": { "type": "Array", "values": values } }
        })
    }

    pub fn energy_reply(tank_level: &str, battery_level: &str) -> Value {
        let kind = |v: &str| if v == "null" { "Null" } else { "Number" };
        json!({
            "service": "getEnergy",
            "status": "200",
            "data": {
                "tankLevel": leaf(kind(tank_level), tank_level),
                "batteryLevel": leaf(kind(battery_level), battery_level)
            }
        })
    }

    pub fn engine_reply(code: &str) -> Value {
        json!({
            "service": "actionEngine",
            "status": "200",
            "actionResult": { "status": code }
        })
    }

    pub fn not_found_reply(vehicle_id: &str) -> Value {
        json!({
            "status": "404",
            "reason": format!("Vehicle id: {} not found.", vehicle_id)
        })
    }
}

// =============================================================================
// In-memory transport
// =============================================================================

/// A [`ProviderTransport`] answering from a [`FixtureSet`] without any I/O
pub struct StaticTransport {
    fixtures: RwLock<FixtureSet>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StaticTransport {
    pub fn new(fixtures: FixtureSet) -> Self {
        Self {
            fixtures: RwLock::new(fixtures),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Transport preloaded with the reference vehicles
    pub fn standard() -> Self {
        Self::new(FixtureSet::standard())
    }

    pub fn set_reply(&self, service: &str, vehicle_id: &str, reply: Value) {
        self.fixtures.write().insert(service, vehicle_id, reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ProviderTransport for StaticTransport {
    async fn send(&self, service_path: &str, body: &ProviderRequest) -> ProviderResult<Value> {
        self.calls.lock().push(RecordedCall {
            service: service_path.to_string(),
            request: body.clone(),
        });
        Ok(self.fixtures.read().reply(service_path, &body.id))
    }
}

// =============================================================================
// HTTP servers
// =============================================================================

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve `router` on 127.0.0.1 with an OS-assigned port
    ///
    /// # Example
    ///
    /// ```ignore
    /// use vgw_provider::testing::TestServer;
    ///
    /// let server = TestServer::start(router).await?;
    /// let body = server.client.get(server.url("/health")).send().await?;
    /// ```
    pub async fn start(router: Router) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

struct FakeState {
    fixtures: RwLock<FixtureSet>,
    calls: Mutex<Vec<RecordedCall>>,
    malformed: AtomicBool,
}

/// HTTP stand-in for the telemetry provider
pub struct FakeProvider {
    server: TestServer,
    state: Arc<FakeState>,
}

impl FakeProvider {
    /// Start a fake provider serving the reference vehicles
    pub async fn start() -> std::io::Result<Self> {
        Self::with_fixtures(FixtureSet::standard()).await
    }

    pub async fn with_fixtures(fixtures: FixtureSet) -> std::io::Result<Self> {
        let state = Arc::new(FakeState {
            fixtures: RwLock::new(fixtures),
            calls: Mutex::new(Vec::new()),
            malformed: AtomicBool::new(false),
        });

        let router = Router::new()
            .route("/{*service}", post(fake_service))
            .with_state(state.clone());

        let server = TestServer::start(router).await?;
        Ok(Self { server, state })
    }

    /// Base URL with trailing slash, ready for [`ProviderConfig::base_url`]
    pub fn base_url(&self) -> String {
        format!("{}/", self.server.base_url())
    }

    /// Provider config pointing at this fake
    pub fn config(&self) -> ProviderConfig {
        ProviderConfig::with_base_url(self.base_url())
    }

    pub fn set_reply(&self, service: &str, vehicle_id: &str, reply: Value) {
        self.state.fixtures.write().insert(service, vehicle_id, reply);
    }

    /// When set, every reply is an HTML error page instead of JSON
    pub fn set_malformed(&self, malformed: bool) {
        self.state.malformed.store(malformed, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().clone()
    }
}

async fn fake_service(
    State(state): State<Arc<FakeState>>,
    Path(service): Path<String>,
    Json(request): Json<ProviderRequest>,
) -> Response {
    let reply = state.fixtures.read().reply(&service, &request.id);
    state.calls.lock().push(RecordedCall { service, request });

    if state.malformed.load(Ordering::SeqCst) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "<html><body>Service Unavailable</body></html>",
        )
            .into_response();
    }

    Json(reply).into_response()
}
