use crate::service::{CommandSink, Completion, ServiceError, SwitchCommand};
use crate::switch::{PortId, PortRole, SwitchConfiguration};
use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::reducer::SelectionReducer;
use super::state::{ActionSet, PortView, Readiness, SelectionPhase, SelectionState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Interactive selection state machine.
///
/// Owns the selection and the registry view on the UI thread. Selection
/// events are applied immediately; control actions are handed to the
/// [`CommandSink`] and their results come back through
/// [`SelectionController::on_completion`].
pub struct SelectionController<C> {
    state: SelectionState,
    sink: C,
}

impl<C: CommandSink> SelectionController<C> {
    pub fn new(initial: SwitchConfiguration, sink: C) -> Self {
        Self {
            state: SelectionState::new(initial),
            sink,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn sink(&self) -> &C {
        &self.sink
    }

    pub fn view(&self) -> &SwitchConfiguration {
        &self.state.view
    }

    pub fn phase(&self) -> SelectionPhase {
        self.state.phase()
    }

    pub fn legal_actions(&self) -> ActionSet {
        self.state.legal_actions()
    }

    pub fn available_actions(&self) -> ActionSet {
        self.state.available_actions()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn last_error(&self) -> Option<&ServiceError> {
        self.state.last_error.as_ref()
    }

    pub fn port_view(&self, role: PortRole, id: PortId) -> PortView {
        self.state.port_view(role, id)
    }

    pub fn select_ingress(&mut self, port: PortId) {
        self.select(PortRole::Ingress, port);
    }

    pub fn select_egress(&mut self, port: PortId) {
        self.select(PortRole::Egress, port);
    }

    pub fn select(&mut self, role: PortRole, port: PortId) {
        self.dispatch(SelectionIntent::Select { role, port });
    }

    /// Connect the selected ports. Returns the command if one was issued.
    pub fn connect(&mut self) -> Option<SwitchCommand> {
        match self.phase() {
            SelectionPhase::BothSelected {
                ingress,
                egress,
                readiness: Readiness::ReadyToConnect,
            } => self.issue(SwitchCommand::Connect { ingress, egress }),
            phase => {
                tracing::warn!(?phase, "Unable to connect: selection is not ready");
                None
            }
        }
    }

    /// Disconnect the selected ingress. Returns the command if one was issued.
    pub fn disconnect(&mut self) -> Option<SwitchCommand> {
        match self.state.selection.ingress {
            Some(ingress) => self.issue(SwitchCommand::Disconnect { ingress }),
            None => {
                tracing::warn!("Unable to disconnect: no ingress selected");
                None
            }
        }
    }

    pub fn disconnect_all(&mut self) -> Option<SwitchCommand> {
        self.issue(SwitchCommand::DisconnectAll)
    }

    /// Apply a finished service call.
    pub fn on_completion(&mut self, completion: Completion) {
        match &completion.outcome {
            Ok(_) => tracing::info!(command = %completion.command, "Switch command completed"),
            Err(err) => {
                tracing::warn!(command = %completion.command, error = %err, "Switch command failed")
            }
        }
        self.dispatch(SelectionIntent::Completed { completion });
    }

    pub fn snapshot_arrived(&mut self, config: SwitchConfiguration) {
        self.dispatch(SelectionIntent::SnapshotArrived { config });
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(SelectionIntent::DismissError);
    }

    fn issue(&mut self, command: SwitchCommand) -> Option<SwitchCommand> {
        if let Some(pending) = self.state.pending {
            tracing::warn!(%command, %pending, "Command rejected: another command is in flight");
            return None;
        }
        self.dispatch(SelectionIntent::Submitted { command });
        self.sink.submit(command);
        Some(command)
    }

    fn dispatch(&mut self, intent: SelectionIntent) {
        dispatch_mvi!(self, state, SelectionReducer, intent);
    }
}
