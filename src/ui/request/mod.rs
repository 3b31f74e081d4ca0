//! Request lifecycle state machine.

mod intent;
mod reducer;
mod state;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::RequestState;
