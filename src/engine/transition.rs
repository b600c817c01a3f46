//! Pure state transitions: `(GameState, GameEvent) -> Result<GameState>`
//!
//! Every function leaves its input untouched and returns the next state, so a
//! rejected event never changes anything.

use rand::Rng;

use super::state::{GameEvent, GameState, Phase, PhaseKind};
use crate::decision::DecisionGenerator;
use crate::error::{FinLifeError, Result};
use crate::stats::PlayerState;

/// Initial state for a player: decisions for the player's current age
pub fn start<R: Rng + ?Sized>(
    player: PlayerState,
    generator: &DecisionGenerator,
    rng: &mut R,
) -> GameState {
    let queue = generator.generate(player.age(), rng);
    let phase = if queue.is_empty() {
        Phase::AgeComplete
    } else {
        Phase::Presenting
    };

    GameState {
        player,
        queue,
        cursor: 0,
        phase,
    }
}

/// Apply one event
pub fn transition<R: Rng + ?Sized>(
    state: &GameState,
    event: &GameEvent,
    generator: &DecisionGenerator,
    rng: &mut R,
) -> Result<GameState> {
    match event {
        GameEvent::Choose(option_id) => choose_option(state, option_id),
        GameEvent::Acknowledge => acknowledge_outcome(state, generator, rng),
        GameEvent::AdvanceAge => advance_age(state, generator, rng),
        GameEvent::Continue => continue_game(state, generator, rng),
    }
}

/// Choose an option of the presented decision and apply its effects
pub fn choose_option(state: &GameState, option_id: &str) -> Result<GameState> {
    if state.phase != Phase::Presenting {
        return Err(invalid("choose_option", state));
    }

    let decision = state
        .queue
        .get(state.cursor)
        .ok_or_else(|| invalid("choose_option", state))?;

    let option = decision
        .option(option_id)
        .ok_or_else(|| FinLifeError::UnknownOption {
            option_id: option_id.to_string(),
            decision_id: decision.id.clone(),
        })?;

    let mut next = state.clone();
    next.player.apply(&option.effects);
    next.player.record_choice(&option.id);
    next.phase = Phase::ShowingOutcome(option.clone());

    Ok(next)
}

/// Dismiss the shown outcome and move to the next decision or the next age
pub fn acknowledge_outcome<R: Rng + ?Sized>(
    state: &GameState,
    generator: &DecisionGenerator,
    rng: &mut R,
) -> Result<GameState> {
    if !matches!(state.phase, Phase::ShowingOutcome(_)) {
        return Err(invalid("acknowledge_outcome", state));
    }

    let cursor = state.cursor + 1;
    if cursor < state.queue.len() {
        let mut next = state.clone();
        next.cursor = cursor;
        next.phase = Phase::Presenting;
        return Ok(next);
    }

    Ok(next_age(state, generator, rng))
}

/// Leave an age that has no decisions
pub fn advance_age<R: Rng + ?Sized>(
    state: &GameState,
    generator: &DecisionGenerator,
    rng: &mut R,
) -> Result<GameState> {
    if state.phase != Phase::AgeComplete {
        return Err(invalid("advance_age", state));
    }

    Ok(next_age(state, generator, rng))
}

/// Acknowledge an outcome or advance past an empty age
pub fn continue_game<R: Rng + ?Sized>(
    state: &GameState,
    generator: &DecisionGenerator,
    rng: &mut R,
) -> Result<GameState> {
    match state.phase {
        Phase::ShowingOutcome(_) => acknowledge_outcome(state, generator, rng),
        Phase::AgeComplete => advance_age(state, generator, rng),
        Phase::Presenting => Err(invalid("continue_game", state)),
    }
}

fn next_age<R: Rng + ?Sized>(
    state: &GameState,
    generator: &DecisionGenerator,
    rng: &mut R,
) -> GameState {
    let mut player = state.player.clone();
    player.advance_age();
    start(player, generator, rng)
}

fn invalid(operation: &'static str, state: &GameState) -> FinLifeError {
    let phase: PhaseKind = state.phase.kind();
    FinLifeError::InvalidTransition {
        operation,
        phase: phase.describe(),
    }
}
