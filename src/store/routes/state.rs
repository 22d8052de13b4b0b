//! State for the routes slice.

use crate::store::mvi::SliceState;

/// The route the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutesState {
    pub selected_route: Option<String>,
}

impl SliceState for RoutesState {}
