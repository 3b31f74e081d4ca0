//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render()
//!    ↑                                │
//!    └──── request lifecycle ─────────┘
//! ```
//!
//! - **State**: owned snapshot of what the view shows
//! - **Intent**: request lifecycle events
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
