//! Counter feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The counter value
//! - `intent.rs` - Tagged mutations (Increment, Decrement)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Widget that observes the store and maps input to triggers

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{
    parse_triggers, CounterLayout, CounterView, Trigger, TriggerParseError, DOWN_LABEL, UP_LABEL,
};
