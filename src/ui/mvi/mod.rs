//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ View
//!    ↑                                                   │
//!    └───────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions such as key presses and clicks
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Single writer path; notifies subscribers after each change

mod store;
mod traits;

pub use store::{Store, SubscriptionId};
pub use traits::{Intent, Reducer, UiState};
