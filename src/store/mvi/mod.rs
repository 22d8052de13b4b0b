//! Model-View-Intent (MVI) primitives for state slices.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ derived views
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: plain data owned by a slice
//! - **Intent**: a closed set of mutations the slice accepts
//! - **Reducer**: pure function that applies an intent to the state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
