//! Intents for the routes slice.

use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RoutesIntent {
    /// Replace the selected route. `None` clears it.
    SelectRoute(Option<String>),
}

impl Intent for RoutesIntent {}
