//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Counter state transitions.
///
/// Both intents are valid from every state. Arithmetic wraps at the `i64`
/// boundaries so that an increment is always undone by a decrement.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = match intent {
            CounterIntent::Increment => state.count.wrapping_add(1),
            CounterIntent::Decrement => state.count.wrapping_sub(1),
        };
        CounterState { count }
    }
}
