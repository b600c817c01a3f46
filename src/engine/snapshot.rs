//! Read-only view of an engine for presentation layers

use serde::Serialize;

use super::state::PhaseKind;
use crate::achievement::AchievementInfo;
use crate::decision::{Decision, DecisionOption};
use crate::stats::{EffectLabel, LifePhase, PlayerState, StatJudge};

/// Everything a presentation layer renders for the current moment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: PlayerState,
    pub phase: PhaseKind,
    pub current_decision: Option<Decision>,
    pub last_choice: Option<DecisionOption>,
    /// Labels of the shown outcome's non-zero effects
    pub effect_labels: Vec<EffectLabel>,
    pub cursor: usize,
    pub queue_len: usize,
    pub terminal_age: u32,
    pub life_phase: LifePhase,
    pub life_phase_label: &'static str,
    /// Percentage of the playable life span lived
    pub life_progress: f64,
    pub decisions_made: usize,
    pub retired: bool,
    pub judges: Vec<StatJudge>,
    pub achievements: Vec<AchievementInfo>,
}

impl Snapshot {
    /// Header line, e.g. "Age 16 of 65"
    pub fn age_caption(&self) -> String {
        format!("Age {} of {}", self.player.age(), self.terminal_age)
    }
}
