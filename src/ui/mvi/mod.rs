//! Model-View-Intent primitives shared by every stateful piece of the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── pointer/keys ────┘
//! ```
//!
//! - **State**: plain data, everything a frame needs to render
//! - **Intent**: a pointer gesture, a key press or a host write
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
