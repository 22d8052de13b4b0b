//! HTTP client for the RTPI `routeinformation` endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{error_codes, BusLine, RouteInformationResponse};
use super::StopsApi;

/// Fetches route information over HTTP.
pub struct HttpStopsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpStopsApi {
    /// Build a client with the configured timeouts.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn route_information_url(&self, route_id: &str) -> Result<Url, ApiError> {
        let endpoint = format!(
            "{}/routeinformation",
            self.config.base_url.trim_end_matches('/')
        );
        Url::parse_with_params(
            &endpoint,
            &[
                ("routeid", route_id),
                ("operator", self.config.operator.as_str()),
                ("format", "json"),
            ],
        )
        .map_err(|e| ApiError::Unavailable(format!("invalid base URL '{}': {}", endpoint, e)))
    }
}

#[async_trait]
impl StopsApi for HttpStopsApi {
    async fn get_bus_stops(&self, route_id: &str) -> Result<Vec<BusLine>, ApiError> {
        let url = self.route_information_url(route_id)?;

        tracing::debug!(url = %url, route = %route_id, "Requesting route information");

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: RouteInformationResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            route = %route_id,
            latency_ms,
            errorcode = %envelope.errorcode,
            results = envelope.results.len(),
            "Route information received"
        );

        match envelope.errorcode.as_str() {
            error_codes::SUCCESS => Ok(envelope.results),
            // The service reports an unknown route as "no results".
            error_codes::NO_RESULTS => Ok(Vec::new()),
            code => Err(ApiError::Service {
                code: code.to_string(),
                message: envelope.errormessage,
            }),
        }
    }
}
