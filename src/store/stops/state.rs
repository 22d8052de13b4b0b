//! State for the stops slice and the views derived from it.

use std::collections::HashMap;

use crate::api::BusStop;
use crate::store::mvi::SliceState;

/// Stops of the loaded route, the selected stop and the search filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StopsState {
    pub stops: Vec<BusStop>,
    pub selected_stop: Option<String>,
    pub search_text: String,
}

impl SliceState for StopsState {}

impl StopsState {
    /// Map from stop identifier to stop.
    ///
    /// Rebuilt on every call. When the list holds the same identifier
    /// twice, the later entry wins.
    pub fn stops_map(&self) -> HashMap<&str, &BusStop> {
        self.stops
            .iter()
            .map(|stop| (stop.stopid.as_str(), stop))
            .collect()
    }

    /// Stops with at least one text field containing the search text,
    /// in list order.
    pub fn filtered_stops(&self) -> Vec<&BusStop> {
        self.stops
            .iter()
            .filter(|stop| stop.matches(&self.search_text))
            .collect()
    }

    /// Full record of the selected stop.
    ///
    /// `None` when nothing is selected or the selected identifier is not
    /// in the current list.
    pub fn selected_stop_data(&self) -> Option<&BusStop> {
        let selected = self.selected_stop.as_deref()?;
        self.stops_map().get(selected).copied()
    }
}
