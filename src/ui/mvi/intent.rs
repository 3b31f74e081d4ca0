//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are events (a request starting, a response arriving) that a
/// reducer folds into the next state.
pub trait Intent: Send + 'static {}
