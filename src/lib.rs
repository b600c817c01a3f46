//! FinLife Core - life decision engine for a personal-finance simulator
//!
//! Players age from 16 and face scripted and random financial decisions
//! whose options move four stats: money, happiness, health and financial IQ.
//! The crate owns the decision/outcome state machine, decision generation,
//! achievements, stat judging and whole-life autoplay. Python bindings are
//! available behind the `python` feature.
//!
//! ```
//! use finlife_core::LifeDecisionEngine;
//!
//! let mut engine = LifeDecisionEngine::new(7);
//! engine.choose_option("tutor").unwrap();
//! assert_eq!(engine.player().money(), 2800);
//! ```

pub mod achievement;
pub mod condition;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod simulator;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

pub use config::GameConfig;
pub use decision::{Decision, DecisionGenerator, DecisionOption, DecisionQueue};
pub use engine::{GameEvent, GameState, LifeDecisionEngine, Phase, PhaseKind, Snapshot};
pub use error::{FinLifeError, Result};
pub use simulator::{simulate_life, ChoiceStrategy, LifeSummary};
pub use stats::{PlayerState, Stat, StatEffects};
