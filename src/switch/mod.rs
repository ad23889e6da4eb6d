//! Port model and the pairing registry.

mod registry;
mod types;

pub use registry::{Pairing, PortPairingRegistry};
pub use types::{PortId, PortPair, PortRole, SwitchConfiguration};
