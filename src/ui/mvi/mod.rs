//! Model-View-Intent (MVI) primitives for the control surface.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Operator gestures and service completions become intents; a reducer folds
//! them into state; the terminal view renders whatever state it is given.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
