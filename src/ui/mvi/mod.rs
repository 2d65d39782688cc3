//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the view-state layer.
//!
//! # Architecture
//!
//! ```text
//! Subscription ──→ Intent ──→ Reducer ──→ State ──→ View
//!                    ↑                              │
//!                    └───────── user action ────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: Data arrivals, action outcomes, local edits
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
