//! Base trait for slice state in MVI architecture.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Cloneable, so callers can take snapshots
/// - Defaultable, which is the state a slice starts in
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
