//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place where a state transition is decided.
///
/// Implementations stay pure: side effects such as haptic pulses or
/// selection callbacks belong to the caller, which compares the state
/// before and after `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
