//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything that touches storage, the network or the
//! clock happens in [`crate::ui::app::App`] around the reduce call.

/// Everything a view needs to render, and nothing else.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or a settled background result.
pub trait Intent: Send + 'static {}

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
