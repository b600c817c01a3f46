//! Benchmarks for decision generation, interactive play and autoplay

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finlife_core::condition::{check_condition, get_or_parse, parser::parse};
use finlife_core::config::GameConfig;
use finlife_core::decision::DecisionGenerator;
use finlife_core::simulator::{simulate_life, FirstOption, MaximizeStat, RandomChoice};
use finlife_core::stats::{PlayerState, Stat};
use finlife_core::{LifeDecisionEngine, PhaseKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn benchmark_generation(c: &mut Criterion) {
    let generator = DecisionGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    c.bench_function("generate_all_ages", |b| {
        b.iter(|| {
            for age in 16..=65 {
                black_box(generator.generate(black_box(age), &mut rng));
            }
        })
    });
}

fn benchmark_autoplay(c: &mut Criterion) {
    let config = Arc::new(GameConfig::default());

    c.bench_function("simulate_life_first_option", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let summary = simulate_life(
                config.clone(),
                &mut FirstOption,
                ChaCha8Rng::seed_from_u64(seed),
            );
            black_box(summary)
        })
    });

    c.bench_function("simulate_life_random", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let summary = simulate_life(
                config.clone(),
                &mut RandomChoice::seeded(seed),
                ChaCha8Rng::seed_from_u64(seed),
            );
            black_box(summary)
        })
    });

    c.bench_function("simulate_life_max_financial_iq", |b| {
        b.iter(|| {
            let summary = simulate_life(
                config.clone(),
                &mut MaximizeStat(Stat::FinancialIq),
                ChaCha8Rng::seed_from_u64(7),
            );
            black_box(summary)
        })
    });
}

fn benchmark_interactive(c: &mut Criterion) {
    // Snapshot after every transition, as a UI would
    c.bench_function("interactive_life_with_snapshots", |b| {
        b.iter(|| {
            let mut engine = LifeDecisionEngine::new(black_box(3));
            while !engine.is_retired() {
                match engine.phase() {
                    PhaseKind::Presenting => {
                        let id = engine
                            .current_decision()
                            .map(|d| d.options[0].id.clone())
                            .unwrap_or_default();
                        let _ = engine.choose_option(&id);
                    }
                    _ => {
                        let _ = engine.continue_game();
                    }
                }
                black_box(engine.snapshot());
            }
        })
    });
}

fn benchmark_condition_parsing(c: &mut Criterion) {
    let conditions = vec![
        "MNY>5000",
        "MNY>5000 & FIQ<10",
        "HAP>=80 | HLT<20",
        "AGE>=18 & FIQ>50 & (OPT?[tutor] | OPT?[emergency-fund])",
        "HMNY>=1000000 & OPT![credit-card-debt,accept-splurge,borrow-money]",
    ];
    let state = PlayerState::new(30, 12_000, 70, 60, 55);

    c.bench_function("condition_parsing_cold", |b| {
        b.iter(|| {
            for cond in &conditions {
                let _ = black_box(parse(cond));
            }
        })
    });

    c.bench_function("condition_check_cached", |b| {
        // Warm up cache
        for cond in &conditions {
            let _ = get_or_parse(cond);
        }

        b.iter(|| {
            for cond in &conditions {
                let _ = black_box(check_condition(cond, &state));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_generation,
    benchmark_autoplay,
    benchmark_interactive,
    benchmark_condition_parsing
);
criterion_main!(benches);
