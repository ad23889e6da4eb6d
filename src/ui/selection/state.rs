use crate::service::{ServiceError, SwitchCommand};
use crate::switch::{PortId, PortRole, SwitchConfiguration};
use crate::ui::mvi::UiState;

/// Operator's uncommitted choice on each side of the crossbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub ingress: Option<PortId>,
    pub egress: Option<PortId>,
}

impl Selection {
    pub fn get(&self, role: PortRole) -> Option<PortId> {
        match role {
            PortRole::Ingress => self.ingress,
            PortRole::Egress => self.egress,
        }
    }

    pub fn set(&mut self, role: PortRole, port: Option<PortId>) {
        match role {
            PortRole::Ingress => self.ingress = port,
            PortRole::Egress => self.egress = port,
        }
    }
}

/// Whether a full selection would be connected or disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The two ports are not paired to each other.
    ReadyToConnect,
    /// The two ports are paired to each other.
    ReadyToDisconnect,
}

/// Derived state-machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoneSelected,
    IngressOnly(PortId),
    EgressOnly(PortId),
    BothSelected {
        ingress: PortId,
        egress: PortId,
        readiness: Readiness,
    },
}

/// Which control actions may be triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet {
    pub connect: bool,
    pub disconnect: bool,
    pub disconnect_all: bool,
}

/// Visual class of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortClass {
    Selected,
    Connected,
    Disconnected,
}

/// Rendering-agnostic description of one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortView {
    pub id: PortId,
    pub role: PortRole,
    pub paired_with: Option<PortId>,
    pub class: PortClass,
}

/// Everything the selection controller knows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    /// Last configuration received from the service.
    pub view: SwitchConfiguration,
    pub selection: Selection,
    /// Command issued and not yet completed.
    pub pending: Option<SwitchCommand>,
    /// Most recent service failure, kept until dismissed.
    pub last_error: Option<ServiceError>,
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn new(view: SwitchConfiguration) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.selection.ingress, self.selection.egress) {
            (None, None) => SelectionPhase::NoneSelected,
            (Some(ingress), None) => SelectionPhase::IngressOnly(ingress),
            (None, Some(egress)) => SelectionPhase::EgressOnly(egress),
            (Some(ingress), Some(egress)) => {
                let readiness = if self.view.pairing.are_paired(ingress, egress) {
                    Readiness::ReadyToDisconnect
                } else {
                    Readiness::ReadyToConnect
                };
                SelectionPhase::BothSelected {
                    ingress,
                    egress,
                    readiness,
                }
            }
        }
    }

    /// Actions permitted by the current selection alone.
    pub fn legal_actions(&self) -> ActionSet {
        let (connect, disconnect) = match self.phase() {
            SelectionPhase::BothSelected {
                readiness: Readiness::ReadyToConnect,
                ..
            } => (true, false),
            SelectionPhase::BothSelected {
                readiness: Readiness::ReadyToDisconnect,
                ..
            } => (false, true),
            _ => (false, false),
        };
        ActionSet {
            connect,
            disconnect,
            disconnect_all: true,
        }
    }

    /// Legal actions, all disabled while a command is in flight.
    pub fn available_actions(&self) -> ActionSet {
        if self.is_busy() {
            return ActionSet::default();
        }
        self.legal_actions()
    }

    pub fn port_view(&self, role: PortRole, id: PortId) -> PortView {
        let paired_with = self.view.partner(role, id);
        let class = if self.selection.get(role) == Some(id) {
            PortClass::Selected
        } else if paired_with.is_some() {
            PortClass::Connected
        } else {
            PortClass::Disconnected
        };
        PortView {
            id,
            role,
            paired_with,
            class,
        }
    }

    /// Views for every port of `role`, in id order.
    pub fn port_views(&self, role: PortRole) -> Vec<PortView> {
        (1..=self.view.port_count(role))
            .map(|id| self.port_view(role, id))
            .collect()
    }
}
