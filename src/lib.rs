//! Transit stops store: a stops slice with derived views, a routes slice,
//! and an async loader backed by the RTPI route information API.

pub mod api;
pub mod config;
pub mod logging;
pub mod store;

pub use api::{ApiError, BusLine, BusStop, HttpStopsApi, StopsApi};
pub use config::{Config, ConfigError};
pub use store::routes::{RoutesIntent, RoutesState, RoutesStore};
pub use store::stops::{LoadError, RouteResolver, StopsIntent, StopsLoader, StopsState, StopsStore};
