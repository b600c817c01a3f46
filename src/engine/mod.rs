//! Life decision engine
//!
//! `GameState` plus the pure transitions in `transition` form the state
//! machine; `LifeDecisionEngine` owns the RNG and achievement tracking and
//! exposes the operations a presentation layer calls.

mod life;
mod snapshot;
mod state;
pub mod transition;

#[cfg(test)]
mod property_tests;

pub use life::*;
pub use snapshot::*;
pub use state::*;
