//! Base trait for intents (mutations) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are the only way a slice's state changes. Each slice
/// declares them as an enum so the set of legal mutations is closed.
pub trait Intent: Send + 'static {}
