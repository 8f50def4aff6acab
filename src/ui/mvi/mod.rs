//! Model-View-Intent (MVI) architecture primitives.
//!
//! Each view owns its state outright and only changes it by dispatching
//! intents through a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store (Reducer) ──→ State ──→ render()
//!    ↑                              │
//!    └────── user input / request completions
//! ```
//!
//! - **State**: Immutable representation of a view
//! - **Intent**: User actions or request completions
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Owns the state, batches intents, reports changed fields

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::{Observable, UiState};
pub use store::{FieldOf, Store};
