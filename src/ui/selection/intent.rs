//! Intents for the selection state machine.

use crate::service::{Completion, SwitchCommand};
use crate::switch::{PortId, PortRole, SwitchConfiguration};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// Operator clicked a port.
    Select { role: PortRole, port: PortId },

    /// A command was handed to the service and is now in flight.
    Submitted { command: SwitchCommand },

    /// A service call finished. Applied even if the selection moved on
    /// while it was in flight.
    Completed { completion: Completion },

    /// Fresh configuration without an associated command.
    SnapshotArrived { config: SwitchConfiguration },

    /// Operator acknowledged the last error.
    DismissError,
}

impl Intent for SelectionIntent {}
