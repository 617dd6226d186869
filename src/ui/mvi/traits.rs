//! Core MVI traits.

use std::fmt::Debug;

/// Marker trait for intents: the tagged actions a reducer accepts.
///
/// `Debug` is required so every dispatch can be traced.
pub trait Intent: Debug + Send + 'static {}

/// Marker trait for UI state objects.
///
/// States are cloned to produce the next state and compared to detect
/// whether a dispatch changed anything. `Default` is the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The only place where state transitions happen.
///
/// `reduce` must be pure: (State, Intent) -> State, no side effects.
/// Side effects belong to whoever observes the [`Store`](super::Store).
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents over `state`, in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
