//! Model-View-Intent primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State is immutable and self-contained, intents carry user actions and
//! system events, and reducers are the only place transitions happen.

/// Marker trait for UI state objects.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events.
pub trait Intent: Send + 'static {}

/// Pure transition function: (State, Intent) -> State.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
