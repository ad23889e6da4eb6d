//! Dual-selection reconciliation between the operator and the switch.
//!
//! The operator picks at most one ingress and one egress port. Picking a
//! connected port pulls in its mate; the controller tracks which control
//! actions are legal and issues them against the switch service.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::SelectionController;
pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::{
    ActionSet, PortClass, PortView, Readiness, Selection, SelectionPhase, SelectionState,
};
