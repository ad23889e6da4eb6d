use serde::{Deserialize, Serialize};
use std::fmt;

use super::registry::Pairing;

/// 1-based port number within its role's range.
pub type PortId = u32;

/// Which side of the crossbar a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortRole {
    Ingress,
    Egress,
}

impl PortRole {
    /// The role on the other side of the crossbar.
    pub fn opposite(self) -> Self {
        match self {
            PortRole::Ingress => PortRole::Egress,
            PortRole::Egress => PortRole::Ingress,
        }
    }
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortRole::Ingress => write!(f, "ingress"),
            PortRole::Egress => write!(f, "egress"),
        }
    }
}

/// A single ingress/egress connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortPair {
    pub ingress: PortId,
    pub egress: PortId,
}

impl PortPair {
    pub fn new(ingress: PortId, egress: PortId) -> Self {
        Self { ingress, egress }
    }
}

impl fmt::Display for PortPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.ingress, self.egress)
    }
}

/// Point-in-time copy of the whole switch.
///
/// Every service call hands one of these back. The receiver owns it; it never
/// aliases the service's live registry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SwitchConfiguration {
    pub num_ingress: u32,
    pub num_egress: u32,
    pub pairing: Pairing,
}

impl SwitchConfiguration {
    pub fn new(num_ingress: u32, num_egress: u32, pairing: Pairing) -> Self {
        Self {
            num_ingress,
            num_egress,
            pairing,
        }
    }

    /// Number of ports declared for `role`.
    pub fn port_count(&self, role: PortRole) -> u32 {
        match role {
            PortRole::Ingress => self.num_ingress,
            PortRole::Egress => self.num_egress,
        }
    }

    /// True when `id` lies in `1..=port_count(role)`.
    pub fn in_range(&self, role: PortRole, id: PortId) -> bool {
        id >= 1 && id <= self.port_count(role)
    }

    /// The port paired with `id`, if any.
    pub fn partner(&self, role: PortRole, id: PortId) -> Option<PortId> {
        self.pairing.partner(role, id)
    }
}
