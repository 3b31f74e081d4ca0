//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States are cloned to derive new ones, compared to detect changes and
/// default to the state a freshly created view starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
