//! Intents for the counter.

use crate::ui::mvi::Intent;

/// The two mutations the counter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// `count ← count + 1`
    Increment,

    /// `count ← count - 1`. No lower bound.
    Decrement,
}

impl Intent for CounterIntent {}
