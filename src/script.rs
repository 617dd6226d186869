//! Non-interactive mode: apply a trigger sequence and report the result.

use crate::ui::counter::{CounterReducer, CounterState, Trigger};
use crate::ui::mvi::Reducer;

/// Apply `triggers` in order to a counter starting at `initial`.
pub fn apply(initial: i64, triggers: &[Trigger]) -> i64 {
    let intents = triggers.iter().map(|trigger| trigger.intent());
    tracing::debug!(initial, triggers = triggers.len(), "applying trigger sequence");
    CounterReducer::reduce_all(CounterState::new(initial), intents).count
}
