//! Game state value type for the decision/outcome state machine

use serde::Serialize;

use crate::decision::{Decision, DecisionOption, DecisionQueue};
use crate::stats::PlayerState;

/// Where the current age's decision loop stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The decision at the cursor awaits a choice
    Presenting,
    /// A choice was made and its outcome awaits acknowledgement
    ShowingOutcome(DecisionOption),
    /// No decision exists for the current age
    AgeComplete,
}

/// Phase without payload, for snapshots and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseKind {
    Presenting,
    ShowingOutcome,
    AgeComplete,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Presenting => PhaseKind::Presenting,
            Phase::ShowingOutcome(_) => PhaseKind::ShowingOutcome,
            Phase::AgeComplete => PhaseKind::AgeComplete,
        }
    }
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Presenting => "Presenting",
            PhaseKind::ShowingOutcome => "ShowingOutcome",
            PhaseKind::AgeComplete => "AgeComplete",
        }
    }

    /// Phrase used in transition errors
    pub fn describe(self) -> &'static str {
        match self {
            PhaseKind::Presenting => "presenting a decision",
            PhaseKind::ShowingOutcome => "showing an outcome",
            PhaseKind::AgeComplete => "the age is complete",
        }
    }
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Pick an option of the presented decision
    Choose(String),
    /// Dismiss the shown outcome
    Acknowledge,
    /// Move past an age without decisions
    AdvanceAge,
    /// The single "continue" button: acknowledge or advance, whichever applies
    Continue,
}

/// Complete engine state. Transitions consume a reference and return a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) player: PlayerState,
    pub(crate) queue: DecisionQueue,
    pub(crate) cursor: usize,
    pub(crate) phase: Phase,
}

impl GameState {
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Decisions generated for the current age
    pub fn queue(&self) -> &[Decision] {
        &self.queue
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Decision at the cursor while presenting or showing its outcome
    pub fn current_decision(&self) -> Option<&Decision> {
        match self.phase {
            Phase::AgeComplete => None,
            _ => self.queue.get(self.cursor),
        }
    }

    /// Option being shown as an outcome
    pub fn last_choice(&self) -> Option<&DecisionOption> {
        match &self.phase {
            Phase::ShowingOutcome(option) => Some(option),
            _ => None,
        }
    }
}
