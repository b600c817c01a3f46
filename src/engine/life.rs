//! Stateful driver around the pure transitions

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::snapshot::Snapshot;
use super::state::{GameEvent, GameState, Phase, PhaseKind};
use super::transition;
use crate::achievement::{AchievementInfo, AchievementTracker};
use crate::config::{GameConfig, Opportunity};
use crate::decision::{Decision, DecisionGenerator, DecisionOption};
use crate::error::{FinLifeError, Result};
use crate::stats::{judge_stat, life_progress, LifePhase, PlayerState, Stat, StatJudge};

/// One life of decisions: owns the config, the generator, the RNG and the
/// current `GameState`. Every operation is a pure transition followed by an
/// achievement check; a rejected operation leaves the engine unchanged.
#[derive(Debug, Clone)]
pub struct LifeDecisionEngine<R = ChaCha8Rng> {
    config: Arc<GameConfig>,
    generator: DecisionGenerator,
    rng: R,
    state: GameState,
    achievements: AchievementTracker,
    /// Unlocks not yet taken by the presentation layer
    pending: Vec<AchievementInfo>,
}

impl LifeDecisionEngine<ChaCha8Rng> {
    /// New life with the default config and a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_config(Arc::new(GameConfig::default()), ChaCha8Rng::seed_from_u64(seed))
    }

    /// New life with the default config and an OS-seeded RNG
    pub fn from_entropy() -> Self {
        Self::with_config(Arc::new(GameConfig::default()), ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> LifeDecisionEngine<R> {
    pub fn with_config(config: Arc<GameConfig>, mut rng: R) -> Self {
        let generator = config.generator();
        let state = transition::start(config.initial_player(), &generator, &mut rng);

        let mut engine = Self {
            config,
            generator,
            rng,
            state,
            achievements: AchievementTracker::new(),
            pending: Vec::new(),
        };

        tracing::info!(
            age = engine.state.player().age(),
            decisions = engine.state.queue().len(),
            "Started a new life"
        );
        engine.check_achievements(Opportunity::Start);
        engine.check_achievements(Opportunity::Trajectory);
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &PlayerState {
        self.state.player()
    }

    pub fn phase(&self) -> PhaseKind {
        self.state.phase().kind()
    }

    pub fn current_decision(&self) -> Option<&Decision> {
        self.state.current_decision()
    }

    pub fn last_choice(&self) -> Option<&DecisionOption> {
        self.state.last_choice()
    }

    /// Whether the player has reached the terminal age. Play may continue past it.
    pub fn is_retired(&self) -> bool {
        self.player().age() >= self.config.terminal_age
    }

    pub fn choose_option(&mut self, option_id: &str) -> Result<&DecisionOption> {
        self.apply(GameEvent::Choose(option_id.to_string()))?;
        self.state
            .last_choice()
            .ok_or(FinLifeError::InvalidTransition {
                operation: "choose_option",
                phase: PhaseKind::Presenting.describe(),
            })
    }

    pub fn acknowledge_outcome(&mut self) -> Result<()> {
        self.apply(GameEvent::Acknowledge)
    }

    pub fn advance_age(&mut self) -> Result<()> {
        self.apply(GameEvent::AdvanceAge)
    }

    pub fn continue_game(&mut self) -> Result<()> {
        self.apply(GameEvent::Continue)
    }

    /// Apply any event through the state machine
    pub fn apply(&mut self, event: GameEvent) -> Result<()> {
        let next = match transition::transition(&self.state, &event, &self.generator, &mut self.rng)
        {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(?event, error = %e, "Rejected transition");
                return Err(e);
            }
        };

        if let Phase::ShowingOutcome(ref option) = next.phase {
            tracing::debug!(option = %option.id, money = next.player.money(), "Chose option");
        }
        if next.player.age() != self.state.player.age() {
            tracing::info!(
                age = next.player.age(),
                decisions = next.queue.len(),
                "Advanced age"
            );
        }

        self.state = next;
        self.check_achievements(Opportunity::Trajectory);
        Ok(())
    }

    /// Check summary achievements; used when a life is wrapped up
    pub fn summarize(&mut self) -> Vec<AchievementInfo> {
        self.check_achievements(Opportunity::Summary)
    }

    /// Take the unlocks gathered since the last call
    pub fn take_new_achievements(&mut self) -> Vec<AchievementInfo> {
        std::mem::take(&mut self.pending)
    }

    /// Every achievement unlocked this life, oldest first
    pub fn achievements(&self) -> &[AchievementInfo] {
        self.achievements.unlocked()
    }

    /// Current judge of each stat
    pub fn judges(&self) -> Vec<StatJudge> {
        let player = self.player();
        Stat::ALL
            .iter()
            .filter_map(|&stat| {
                let levels = self.config.judge.get(&stat)?;
                judge_stat(levels, stat, player.stat(stat))
            })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let player = self.player();
        let life_phase = LifePhase::from_age(player.age());
        let last_choice = self.state.last_choice().cloned();
        let effect_labels = last_choice
            .as_ref()
            .map(|option| option.effects.labels())
            .unwrap_or_default();

        Snapshot {
            player: player.clone(),
            phase: self.phase(),
            current_decision: self.state.current_decision().cloned(),
            last_choice,
            effect_labels,
            cursor: self.state.cursor(),
            queue_len: self.state.queue().len(),
            terminal_age: self.config.terminal_age,
            life_phase,
            life_phase_label: life_phase.label(),
            life_progress: life_progress(
                player.age(),
                self.config.start_age,
                self.config.terminal_age,
            ),
            decisions_made: player.choices().len(),
            retired: self.is_retired(),
            judges: self.judges(),
            achievements: self.achievements.unlocked().to_vec(),
        }
    }

    fn check_achievements(&mut self, opportunity: Opportunity) -> Vec<AchievementInfo> {
        let fresh = self
            .achievements
            .check(opportunity, self.state.player(), &self.config.achievements);
        self.pending.extend(fresh.iter().cloned());
        fresh
    }
}
