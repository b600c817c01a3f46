//! Whole-life autoplay on top of the decision engine

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use super::strategy::ChoiceStrategy;
use crate::achievement::AchievementInfo;
use crate::config::GameConfig;
use crate::engine::{LifeDecisionEngine, PhaseKind};
use crate::error::{FinLifeError, Result};
use crate::stats::{PlayerState, StatEffects, StatJudge};

/// One decision taken during a year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearContent {
    pub decision_id: String,
    pub title: String,
    pub option_id: String,
    pub option_text: String,
    pub consequence: String,
    pub effects: StatEffects,
}

/// Trajectory entry for a single year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryEntry {
    pub age: u32,
    pub content: Vec<YearContent>,
    pub is_end: bool,
    pub money: i64,
    pub happiness: i32,
    pub health: i32,
    #[serde(rename = "financialIQ")]
    pub financial_iq: i32,
}

impl TrajectoryEntry {
    fn closing(age: u32, content: Vec<YearContent>, player: &PlayerState, is_end: bool) -> Self {
        Self {
            age,
            content,
            is_end,
            money: player.money(),
            happiness: player.happiness(),
            health: player.health(),
            financial_iq: player.financial_iq(),
        }
    }
}

/// Result of an autoplayed life
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeSummary {
    pub strategy: String,
    pub trajectory: Vec<TrajectoryEntry>,
    pub final_player: PlayerState,
    pub total_score: i64,
    pub judges: Vec<StatJudge>,
    pub achievements: Vec<AchievementInfo>,
}

impl LifeSummary {
    pub fn decisions_made(&self) -> usize {
        self.final_player.choices().len()
    }
}

/// Play one life from the start age to the terminal age, letting `strategy`
/// answer every decision
pub fn simulate_life<S, R>(
    config: Arc<GameConfig>,
    strategy: &mut S,
    rng: R,
) -> Result<LifeSummary>
where
    S: ChoiceStrategy + ?Sized,
    R: Rng,
{
    let mut engine = LifeDecisionEngine::with_config(config, rng);
    let mut trajectory: Vec<TrajectoryEntry> = Vec::new();
    let mut content: Vec<YearContent> = Vec::new();

    while !engine.is_retired() {
        match engine.phase() {
            PhaseKind::Presenting => {
                let (entry, option_id) = {
                    let decision = engine
                        .current_decision()
                        .ok_or(FinLifeError::InvalidTransition {
                            operation: "simulate_life",
                            phase: PhaseKind::Presenting.describe(),
                        })?;
                    let option = strategy.choose(decision, engine.player()).ok_or_else(|| {
                        FinLifeError::InvalidCatalog(format!(
                            "decision '{}' has no options",
                            decision.id
                        ))
                    })?;

                    let entry = YearContent {
                        decision_id: decision.id.clone(),
                        title: decision.title.clone(),
                        option_id: option.id.clone(),
                        option_text: option.text.clone(),
                        consequence: option.consequence.clone(),
                        effects: option.effects,
                    };
                    (entry, option.id.clone())
                };

                engine.choose_option(&option_id)?;
                content.push(entry);
            }
            PhaseKind::ShowingOutcome | PhaseKind::AgeComplete => {
                let age = engine.player().age();
                let closing = engine.player().clone();
                engine.continue_game()?;

                if engine.player().age() != age {
                    let is_end = engine.is_retired();
                    trajectory.push(TrajectoryEntry::closing(
                        age,
                        std::mem::take(&mut content),
                        &closing,
                        is_end,
                    ));
                }
            }
        }
    }

    engine.summarize();

    let final_player = engine.player().clone();
    tracing::info!(
        strategy = %strategy.name(),
        age = final_player.age(),
        money = final_player.money(),
        decisions = final_player.choices().len(),
        "Finished autoplay"
    );

    Ok(LifeSummary {
        strategy: strategy.name(),
        trajectory,
        total_score: final_player.summary_score(),
        judges: engine.judges(),
        achievements: engine.achievements().to_vec(),
        final_player,
    })
}
