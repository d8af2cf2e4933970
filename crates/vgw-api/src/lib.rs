//! vgw-api - Vehicle gateway REST API layer
//!
//! Serves the vehicle contract over HTTP using any `VehicleBackend`.
//!
//! # Usage
//!
//! ```ignore
//! use vgw_api::{create_router, AppState};
//! use vgw_provider::{ProviderBackend, ProviderConfig};
//!
//! let backend = ProviderBackend::from_config(&ProviderConfig::default())?;
//! let state = AppState::new(Arc::new(backend));
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the vehicle REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Vehicle routes. The id segment also accepts the legacy ":<id>" form.
        .route(
            "/vehicles/{vehicle_id}",
            get(handlers::vehicles::get_vehicle_info),
        )
        .route(
            "/vehicles/{vehicle_id}/doors",
            get(handlers::vehicles::get_doors),
        )
        .route(
            "/vehicles/{vehicle_id}/fuel",
            get(handlers::energy::get_fuel),
        )
        .route(
            "/vehicles/{vehicle_id}/battery",
            get(handlers::energy::get_battery),
        )
        .route(
            "/vehicles/{vehicle_id}/engine",
            post(handlers::engine::post_engine),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
