//! State for the counter.

use crate::ui::mvi::{Reducer, UiState};

use super::intent::CounterIntent;
use super::reducer::CounterReducer;

/// The single counter value. Starts at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }

    /// Next state after [`CounterIntent::Increment`].
    pub fn increment(self) -> Self {
        CounterReducer::reduce(self, CounterIntent::Increment)
    }

    /// Next state after [`CounterIntent::Decrement`].
    pub fn decrement(self) -> Self {
        CounterReducer::reduce(self, CounterIntent::Decrement)
    }
}
