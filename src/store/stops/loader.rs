//! Fetches the stops of a route and commits them to the stops slice.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::api::{ApiError, BusLine, BusStop, StopsApi};

use super::intent::StopsIntent;
use super::StopsStore;

/// Errors returned by [`StopsLoader::load_stops_from_api`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// Neither an explicit route nor a resolver route was available
    #[error("No route has been selected")]
    NoRouteSelected,

    /// Fetching or decoding the route failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Supplies the route to load when the caller does not name one.
pub trait RouteResolver: Send + Sync {
    fn selected_route(&self) -> Option<String>;
}

/// A fixed route, or none.
impl RouteResolver for Option<String> {
    fn selected_route(&self) -> Option<String> {
        self.clone()
    }
}

/// Loads stops for a route into a [`StopsStore`].
#[derive(Clone)]
pub struct StopsLoader {
    api: Arc<dyn StopsApi>,
    routes: Arc<dyn RouteResolver>,
    store: StopsStore,
}

impl StopsLoader {
    pub fn new(api: Arc<dyn StopsApi>, routes: Arc<dyn RouteResolver>, store: StopsStore) -> Self {
        Self { api, routes, store }
    }

    /// The store this loader commits to.
    pub fn store(&self) -> &StopsStore {
        &self.store
    }

    /// Fetch the stops of `route` and replace the stop list with them.
    ///
    /// Without a route (or with an empty one) the resolver is asked. The
    /// fetched lines are flattened and deduplicated by stop identifier
    /// before being committed. Returns the number of committed stops.
    ///
    /// On error the stored list is left untouched.
    pub async fn load_stops_from_api(&self, route: Option<&str>) -> Result<usize, LoadError> {
        let route = match route.filter(|r| !r.is_empty()) {
            Some(route) => route.to_string(),
            None => self
                .routes
                .selected_route()
                .filter(|r| !r.is_empty())
                .ok_or(LoadError::NoRouteSelected)?,
        };

        tracing::debug!(route = %route, "Loading stops");

        let lines = match self.api.get_bus_stops(&route).await {
            Ok(lines) => lines,
            Err(err) => {
                tracing::error!(route = %route, error = %err, "Failed to load stops");
                return Err(err.into());
            }
        };

        let line_count = lines.len();
        let stops = unique_stops(flatten_lines(lines));
        let count = stops.len();

        self.store.dispatch(StopsIntent::LoadBusStops(stops));

        tracing::info!(route = %route, lines = line_count, stops = count, "Stops loaded");
        Ok(count)
    }
}

/// Concatenate every line's stops, in line order then stop order.
pub fn flatten_lines(lines: Vec<BusLine>) -> Vec<BusStop> {
    lines.into_iter().flat_map(|line| line.stops).collect()
}

/// Keep one stop per identifier.
///
/// Identifiers keep the position of their first occurrence; the record
/// kept is the last one seen.
pub fn unique_stops(stops: Vec<BusStop>) -> Vec<BusStop> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(stops.len());
    let mut unique: Vec<BusStop> = Vec::with_capacity(stops.len());

    for stop in stops {
        match positions.get(&stop.stopid) {
            Some(&index) => unique[index] = stop,
            None => {
                positions.insert(stop.stopid.clone(), unique.len());
                unique.push(stop);
            }
        }
    }

    unique
}
