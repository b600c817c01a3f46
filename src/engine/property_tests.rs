//! Property tests for the engine module
//!
//! Stat ranges, transition validity and rejection without side effects

use std::sync::Arc;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::engine::{GameEvent, LifeDecisionEngine, PhaseKind};
use crate::stats::STAT_MAX;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Arbitrary UI input, valid or not in the current phase
fn event_strategy() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        (0..3usize).prop_map(|i| GameEvent::Choose(format!("#{}", i))),
        Just(GameEvent::Choose("not-an-option".to_string())),
        Just(GameEvent::Acknowledge),
        Just(GameEvent::AdvanceAge),
        Just(GameEvent::Continue),
    ]
}

fn engine_for(seed: u64, chance: f64) -> LifeDecisionEngine {
    let config = GameConfig {
        random_event_chance: chance,
        ..GameConfig::default()
    };
    LifeDecisionEngine::with_config(Arc::new(config), ChaCha8Rng::seed_from_u64(seed))
}

/// Resolve "#n" into the id of the n-th option of the presented decision
fn resolve(engine: &LifeDecisionEngine, event: GameEvent) -> GameEvent {
    if let GameEvent::Choose(ref id) = event {
        let index = id.strip_prefix('#').and_then(|n| n.parse::<usize>().ok());
        if let (Some(index), Some(decision)) = (index, engine.current_decision()) {
            let option = &decision.options[index % decision.options.len()];
            return GameEvent::Choose(option.id.clone());
        }
    }
    event
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Stats stay in range whatever the input sequence
    #[test]
    fn prop_stats_stay_in_range(
        seed in any::<u64>(),
        chance in 0.0..=1.0f64,
        events in prop::collection::vec(event_strategy(), 1..200)
    ) {
        let mut engine = engine_for(seed, chance);

        for event in events {
            let event = resolve(&engine, event);
            let _ = engine.apply(event);

            let player = engine.player();
            prop_assert!(player.money() >= 0);
            prop_assert!((0..=STAT_MAX).contains(&player.happiness()));
            prop_assert!((0..=STAT_MAX).contains(&player.health()));
            prop_assert!((0..=STAT_MAX).contains(&player.financial_iq()));
        }
    }

    /// Rejected events leave the state exactly as it was
    #[test]
    fn prop_rejection_is_side_effect_free(
        seed in any::<u64>(),
        events in prop::collection::vec(event_strategy(), 1..100)
    ) {
        let mut engine = engine_for(seed, 0.3);

        for event in events {
            let event = resolve(&engine, event);
            let before = engine.state().clone();
            if engine.apply(event).is_err() {
                prop_assert_eq!(engine.state(), &before);
            }
        }
    }

    /// The phase always agrees with the cursor and queue
    #[test]
    fn prop_phase_matches_queue(
        seed in any::<u64>(),
        events in prop::collection::vec(event_strategy(), 1..150)
    ) {
        let mut engine = engine_for(seed, 0.5);

        for event in events {
            let event = resolve(&engine, event);
            let _ = engine.apply(event);

            let state = engine.state();
            match state.phase().kind() {
                PhaseKind::AgeComplete => prop_assert!(state.queue().is_empty()),
                PhaseKind::Presenting => prop_assert!(state.cursor() < state.queue().len()),
                PhaseKind::ShowingOutcome => {
                    prop_assert!(state.cursor() < state.queue().len());
                    let shown = engine.last_choice().unwrap();
                    prop_assert!(engine.current_decision().unwrap().option(&shown.id).is_some());
                }
            }
        }
    }

    /// Every successful choice is recorded once
    #[test]
    fn prop_choices_count_successful_picks(
        seed in any::<u64>(),
        events in prop::collection::vec(event_strategy(), 1..150)
    ) {
        let mut engine = engine_for(seed, 0.3);
        let mut picks = 0usize;

        for event in events {
            let event = resolve(&engine, event);
            let is_choice = matches!(event, GameEvent::Choose(_));
            if engine.apply(event).is_ok() && is_choice {
                picks += 1;
            }
        }

        prop_assert_eq!(engine.player().choices().len(), picks);
    }
}
