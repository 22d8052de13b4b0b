//! Intents for the stops slice.

use crate::api::BusStop;
use crate::store::mvi::Intent;

/// Every way the stops slice can change.
#[derive(Debug, Clone)]
pub enum StopsIntent {
    /// Replace the stop list wholesale.
    LoadBusStops(Vec<BusStop>),
    /// Replace the selected stop identifier. `None` clears the selection.
    SelectStop(Option<String>),
    /// Replace the search text used by `filtered_stops`.
    FilterStopsByText(String),
}

impl Intent for StopsIntent {}
