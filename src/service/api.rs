use std::fmt;
use std::future::Future;

use crate::service::error::ServiceError;
use crate::switch::{PortId, SwitchConfiguration};

/// Boundary between the selection controller and whatever drives the switch.
///
/// [`crate::service::SwitchService`] simulates the hardware in-process; a real
/// RPC client can implement the same trait without the controller noticing.
pub trait SwitchApi: Clone + Send + Sync + 'static {
    /// Current configuration. Never fails.
    fn get_configuration(&self) -> impl Future<Output = SwitchConfiguration> + Send;

    /// Pair `ingress` with `egress`, breaking any pairing either was part of.
    fn connect(
        &self,
        ingress: PortId,
        egress: PortId,
    ) -> impl Future<Output = Result<SwitchConfiguration, ServiceError>> + Send;

    /// Break the pairing of `ingress`. Unpaired ingress is a no-op.
    fn disconnect(
        &self,
        ingress: PortId,
    ) -> impl Future<Output = Result<SwitchConfiguration, ServiceError>> + Send;

    /// Break every pairing. Never fails.
    fn disconnect_all(&self) -> impl Future<Output = SwitchConfiguration> + Send;
}

/// A mutating request issued against the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCommand {
    Connect { ingress: PortId, egress: PortId },
    Disconnect { ingress: PortId },
    DisconnectAll,
}

impl fmt::Display for SwitchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchCommand::Connect { ingress, egress } => {
                write!(f, "connect {} -> {}", ingress, egress)
            }
            SwitchCommand::Disconnect { ingress } => write!(f, "disconnect {}", ingress),
            SwitchCommand::DisconnectAll => write!(f, "disconnect all"),
        }
    }
}
