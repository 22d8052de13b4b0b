//! Shared test utilities: fixtures and a fake API.

#![allow(dead_code)]

pub mod mock_rtpi;

use async_trait::async_trait;
use busstops::{ApiError, BusLine, BusStop, StopsApi};
use parking_lot::Mutex;

/// Build a stop whose name fields all derive from `name`.
pub fn stop(id: &str, name: &str) -> BusStop {
    BusStop {
        stopid: id.to_string(),
        displaystopid: id.to_string(),
        shortname: name.to_string(),
        shortnamelocalized: format!("{} (ga)", name),
        fullname: name.to_string(),
        fullnamelocalized: format!("{} (ga)", name),
        ..Default::default()
    }
}

pub fn line(destination: &str, stops: Vec<BusStop>) -> BusLine {
    BusLine {
        operator: "bac".to_string(),
        destination: destination.to_string(),
        stops,
        ..Default::default()
    }
}

/// What [`FakeApi`] answers with.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Lines(Vec<BusLine>),
    Fail(String),
}

/// In-memory [`StopsApi`] that records the routes it was asked for.
pub struct FakeApi {
    response: FakeResponse,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn lines(lines: Vec<BusLine>) -> Self {
        Self::new(FakeResponse::Lines(lines))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(FakeResponse::Fail(message.to_string()))
    }

    fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl StopsApi for FakeApi {
    async fn get_bus_stops(&self, route_id: &str) -> Result<Vec<BusLine>, ApiError> {
        self.calls.lock().push(route_id.to_string());
        match &self.response {
            FakeResponse::Lines(lines) => Ok(lines.clone()),
            FakeResponse::Fail(message) => Err(ApiError::Unavailable(message.clone())),
        }
    }
}
