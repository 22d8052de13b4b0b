//! Stops slice: the stops of the loaded route, the selected stop and a
//! text filter.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - State and derived views
//! - `intent.rs` - The closed set of mutations
//! - `reducer.rs` - State transitions
//! - `loader.rs` - Async fetch that ends in a `LoadBusStops` intent

mod intent;
mod loader;
mod reducer;
mod state;

pub use intent::StopsIntent;
pub use loader::{flatten_lines, unique_stops, LoadError, RouteResolver, StopsLoader};
pub use reducer::StopsReducer;
pub use state::StopsState;

use crate::store::container::Store;

pub type StopsStore = Store<StopsReducer>;
