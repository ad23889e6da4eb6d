//! Reducer for the port selection state machine.

use crate::switch::{PortId, PortRole, SwitchConfiguration};
use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::{Selection, SelectionState};

/// Pure transition function. Issuing commands to the service is left to
/// [`super::SelectionController`].
pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Select { role, port } => {
                if !state.view.in_range(role, port) {
                    tracing::warn!(%role, port, "Ignoring selection outside port range");
                    return state;
                }
                state.selection = toggle(state.selection, &state.view, role, port);
                state
            }

            SelectionIntent::Submitted { command } => {
                state.pending = Some(command);
                state.last_error = None;
                state
            }

            SelectionIntent::Completed { completion } => {
                if state.pending != Some(completion.command) {
                    tracing::debug!(
                        command = %completion.command,
                        "Completion does not match pending command"
                    );
                }
                state.pending = None;
                state.view = completion.snapshot;
                state.selection = revalidate(state.selection, &state.view);
                match completion.outcome {
                    Ok(_) => state.selection = Selection::default(),
                    // Selection is left as the operator had it.
                    Err(err) => state.last_error = Some(err),
                }
                state
            }

            SelectionIntent::SnapshotArrived { config } => {
                state.view = config;
                state.selection = revalidate(state.selection, &state.view);
                state
            }

            SelectionIntent::DismissError => {
                state.last_error = None;
                state
            }
        }
    }
}

/// Apply a click on `port` of `role`.
fn toggle(
    mut selection: Selection,
    view: &SwitchConfiguration,
    role: PortRole,
    port: PortId,
) -> Selection {
    let other = role.opposite();
    let mate = view.partner(role, port);

    if selection.get(role) == Some(port) {
        selection.set(role, None);
        if mate.is_some() && selection.get(other) == mate {
            selection.set(other, None);
        }
        return selection;
    }

    selection.set(role, Some(port));
    match mate {
        Some(mate) => selection.set(other, Some(mate)),
        None => {
            // A selection that only existed because of some other pairing
            // no longer means anything.
            let stale = selection
                .get(other)
                .and_then(|selected| view.partner(other, selected))
                .is_some_and(|owner| owner != port);
            if stale {
                selection.set(other, None);
            }
        }
    }
    selection
}

/// Drop selected ids that fall outside `view`'s ranges.
fn revalidate(mut selection: Selection, view: &SwitchConfiguration) -> Selection {
    for role in [PortRole::Ingress, PortRole::Egress] {
        if let Some(port) = selection.get(role) {
            if !view.in_range(role, port) {
                selection.set(role, None);
            }
        }
    }
    selection
}
