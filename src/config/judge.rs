//! Judge configuration structures for stat evaluation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::stats::Stat;

/// Judge level for stat evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeLevel {
    /// Minimum value for this level
    pub min: i64,
    /// Grade/tier of this level
    pub grade: i32,
    /// Display text for this level
    pub text: String,
}

impl JudgeLevel {
    fn new(min: i64, grade: i32, text: &str) -> Self {
        Self {
            min,
            grade,
            text: text.to_string(),
        }
    }
}

/// Judge levels per stat
pub type JudgeConfig = HashMap<Stat, Vec<JudgeLevel>>;

/// Default tiers: 80/60/40 for bounded stats, dollar thresholds for money
pub fn default_judge_levels() -> JudgeConfig {
    let bounded = || {
        vec![
            JudgeLevel::new(80, 3, "Excellent"),
            JudgeLevel::new(60, 2, "Good"),
            JudgeLevel::new(40, 1, "Fair"),
            JudgeLevel::new(0, 0, "Struggling"),
        ]
    };

    let mut config = HashMap::with_capacity(4);
    config.insert(
        Stat::Money,
        vec![
            JudgeLevel::new(100_000, 3, "Wealthy"),
            JudgeLevel::new(25_000, 2, "Comfortable"),
            JudgeLevel::new(5_000, 1, "Getting By"),
            JudgeLevel::new(0, 0, "Broke"),
        ],
    );
    config.insert(Stat::Happiness, bounded());
    config.insert(Stat::Health, bounded());
    config.insert(Stat::FinancialIq, bounded());
    config
}

/// Sort every stat's levels by `min` descending, highest tier first
pub fn sort_judge_levels(config: &mut JudgeConfig) {
    for levels in config.values_mut() {
        levels.sort_by(|a, b| b.min.cmp(&a.min));
    }
}
