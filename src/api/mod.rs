//! Client side of the real-time passenger information API.
//!
//! The store only depends on the [`StopsApi`] trait; [`HttpStopsApi`]
//! is the production implementation.

mod client;
mod error;
mod types;

pub use client::HttpStopsApi;
pub use error::ApiError;
pub use types::{error_codes, BusLine, BusStop, RouteInformationResponse, StopOperator};

use async_trait::async_trait;

/// Source of per-route stop data.
#[async_trait]
pub trait StopsApi: Send + Sync {
    /// Fetch every line of `route_id`, each with its ordered stops.
    async fn get_bus_stops(&self, route_id: &str) -> Result<Vec<BusLine>, ApiError>;
}
