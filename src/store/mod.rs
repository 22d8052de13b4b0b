//! Application state, split into slices.
//!
//! Each slice is a state type, an intent enum and a reducer, held in a
//! shared [`Store`].

mod container;
pub mod mvi;
pub mod routes;
pub mod stops;

pub use container::Store;
