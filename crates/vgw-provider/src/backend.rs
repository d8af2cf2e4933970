//! ProviderBackend - VehicleBackend backed by the telemetry provider

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use vgw_core::{
    DoorEntry, EnergyKind, EnergyLevel, EngineResult, GatewayResult, VehicleBackend, VehicleInfo,
};

use crate::client::{ProviderClient, ProviderTransport};
use crate::config::{ProviderConfig, ServicePaths};
use crate::envelope::{ProviderRequest, RequestTemplate};
use crate::error::ProviderResult;
use crate::{engine, normalize};

/// A `VehicleBackend` that answers every call with exactly one provider
/// request and normalizes the reply.
///
/// Holds only immutable configuration and the transport, so a single
/// instance is shared by all concurrent requests.
pub struct ProviderBackend {
    transport: Arc<dyn ProviderTransport>,
    template: RequestTemplate,
    services: ServicePaths,
}

impl ProviderBackend {
    pub fn new(
        transport: Arc<dyn ProviderTransport>,
        template: RequestTemplate,
        services: ServicePaths,
    ) -> Self {
        Self {
            transport,
            template,
            services,
        }
    }

    /// Build a backend talking HTTP to the configured provider
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        let client = ProviderClient::from_config(config)?;

        tracing::info!(
            base_url = %client.base_url(),
            response_type = %config.response_type,
            "ProviderBackend configured"
        );

        Ok(Self::new(
            Arc::new(client),
            config.request_template(),
            config.services.clone(),
        ))
    }

    /// Same transport and services with the default request template
    pub fn with_transport(transport: Arc<dyn ProviderTransport>) -> Self {
        Self::new(transport, RequestTemplate::default(), ServicePaths::default())
    }

    pub fn services(&self) -> &ServicePaths {
        &self.services
    }

    async fn fetch(&self, service: &str, request: ProviderRequest) -> GatewayResult<Value> {
        tracing::debug!(service = %service, vehicle_id = %request.id, "Provider request");

        match self.transport.send(service, &request).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::warn!(service = %service, vehicle_id = %request.id, error = %e, "Provider call failed");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl VehicleBackend for ProviderBackend {
    async fn vehicle_info(&self, vehicle_id: &str) -> GatewayResult<VehicleInfo> {
        let reply = self
            .fetch(
                &self.services.vehicle_info,
                self.template.for_vehicle(vehicle_id),
            )
            .await?;
        normalize::vehicle_info(reply)
    }

    async fn doors(&self, vehicle_id: &str) -> GatewayResult<Vec<DoorEntry>> {
        let reply = self
            .fetch(
                &self.services.security_status,
                self.template.for_vehicle(vehicle_id),
            )
            .await?;
        normalize::doors(reply)
    }

    async fn energy(&self, vehicle_id: &str, kind: EnergyKind) -> GatewayResult<EnergyLevel> {
        let reply = self
            .fetch(&self.services.energy, self.template.for_vehicle(vehicle_id))
            .await?;
        normalize::energy_level(reply, kind)
    }

    async fn engine(&self, vehicle_id: &str, action: &str) -> GatewayResult<EngineResult> {
        let (action, request) = engine::command_request(&self.template, vehicle_id, action)?;

        let reply = self.fetch(&self.services.engine_action, request).await?;
        let result = engine::interpret_result(&reply);

        tracing::info!(vehicle_id = %vehicle_id, action = %action, status = ?result.status, "Engine command");
        Ok(result)
    }
}
