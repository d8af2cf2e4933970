//! Provider HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ProviderConfig;
use crate::envelope::ProviderRequest;
use crate::error::{ProviderError, ProviderResult};

/// Sends one request to the telemetry provider and returns its JSON reply.
///
/// Implemented by [`ProviderClient`] for real traffic and by
/// [`crate::testing::StaticTransport`] for tests.
#[async_trait]
pub trait ProviderTransport: Send + Sync {
    /// POST `body` to the service at `service_path` and parse the reply.
    ///
    /// Exactly one outbound call per invocation; no retries.
    async fn send(&self, service_path: &str, body: &ProviderRequest) -> ProviderResult<Value>;
}

/// Telemetry provider HTTP client
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: Url,
}

impl ProviderClient {
    /// Create a new client using the transport's default timeouts
    ///
    /// # Arguments
    /// * `base_url` - Provider base address (e.g., "http://gmapi.azurewebsites.net/")
    pub fn new(base_url: &str) -> ProviderResult<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a new client with an optional whole-request timeout
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> ProviderResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a client from provider configuration
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        Self::with_timeout(&config.base_url, config.request_timeout())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for a service path
    pub fn service_url(&self, service_path: &str) -> ProviderResult<Url> {
        Ok(self.base_url.join(service_path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl ProviderTransport for ProviderClient {
    #[instrument(skip(self, body), fields(vehicle_id = %body.id))]
    async fn send(&self, service_path: &str, body: &ProviderRequest) -> ProviderResult<Value> {
        let url = self.service_url(service_path)?;
        debug!("POST {}", url);

        // The provider reports failures inside the envelope, so the HTTP
        // status is not inspected here.
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(http_status = %status, len = bytes.len(), "Provider replied");

        serde_json::from_slice(&bytes).map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

/// Parse the base URL, making sure service paths are joined below it
/// instead of replacing its last segment.
fn parse_base_url(base_url: &str) -> ProviderResult<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{}/", base_url))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ProviderClient::new("http://gmapi.azurewebsites.net/");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = ProviderClient::new("not a url");
        assert!(matches!(client, Err(ProviderError::InvalidUrl(_))));
    }

    #[test]
    fn service_url_joins_below_base() {
        let client = ProviderClient::new("http://provider.local/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://provider.local/api/");
        assert_eq!(
            client.service_url("getEnergyService").unwrap().as_str(),
            "http://provider.local/api/getEnergyService"
        );
        assert_eq!(
            client.service_url("/actionEngineService").unwrap().as_str(),
            "http://provider.local/api/actionEngineService"
        );
    }

    #[tokio::test]
    async fn unreachable_provider_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let client = ProviderClient::with_timeout(
            "http://127.0.0.1:9/",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let body = crate::RequestTemplate::default().for_vehicle("1234");

        let err = client.send("getVehicleInfoService", &body).await.unwrap_err();
        assert!(matches!(err, ProviderError::HttpError(_)));
    }
}
