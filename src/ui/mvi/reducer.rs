//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into state: (State, Intent) -> State.
///
/// Reducers never talk to the switch service; whoever dispatches the intent
/// performs the side effects around the call.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
