//! Configuration module for game data structures
//!
//! A `GameConfig` carries the seed stats, age limits, random event chance,
//! judge levels, achievements and optionally a custom decision catalog.
//! Every field has a default, so a partial JSON document is a valid config.

mod achievement;
mod judge;

pub use achievement::*;
pub use judge::*;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::condition::{check_properties, get_or_parse};
use crate::decision::{Catalog, DecisionGenerator, DEFAULT_RANDOM_EVENT_CHANCE};
use crate::error::{FinLifeError, Result};
use crate::stats::PlayerState;

/// Age at which a new life starts
pub const DEFAULT_START_AGE: u32 = 16;
/// Age the life progress bar runs to
pub const DEFAULT_TERMINAL_AGE: u32 = 65;

/// Seed stats of a fresh life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingStats {
    pub money: i64,
    pub happiness: i32,
    pub health: i32,
    #[serde(rename = "financialIQ")]
    pub financial_iq: i32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            money: 1000,
            happiness: 70,
            health: 90,
            financial_iq: 20,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub start_age: u32,
    pub terminal_age: u32,
    pub starting_stats: StartingStats,
    pub random_event_chance: f64,
    pub judge: JudgeConfig,
    pub achievements: Vec<AchievementConfig>,
    /// Custom decision content; the built-in story when absent
    pub catalog: Option<Catalog>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_age: DEFAULT_START_AGE,
            terminal_age: DEFAULT_TERMINAL_AGE,
            starting_stats: StartingStats::default(),
            random_event_chance: DEFAULT_RANDOM_EVENT_CHANCE,
            judge: default_judge_levels(),
            achievements: default_achievements(),
            catalog: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        sort_judge_levels(&mut config.judge);
        Ok(config)
    }

    /// Check ranges, catalog content and achievement conditions
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.random_event_chance) {
            return Err(FinLifeError::DeserializationError(format!(
                "random_event_chance must be within [0, 1], got {}",
                self.random_event_chance
            )));
        }

        if self.terminal_age <= self.start_age {
            return Err(FinLifeError::DeserializationError(format!(
                "terminal_age {} must be greater than start_age {}",
                self.terminal_age, self.start_age
            )));
        }

        if let Some(ref catalog) = self.catalog {
            catalog.validate()?;
        }

        for (i, achievement) in self.achievements.iter().enumerate() {
            if self.achievements[..i].iter().any(|a| a.id == achievement.id) {
                return Err(FinLifeError::DeserializationError(format!(
                    "duplicate achievement id '{}'",
                    achievement.id
                )));
            }
            if !achievement.condition.trim().is_empty() {
                check_properties(&get_or_parse(&achievement.condition)?)?;
            }
        }

        Ok(())
    }

    /// Fresh player state at the start age
    pub fn initial_player(&self) -> PlayerState {
        let seed = self.starting_stats;
        PlayerState::new(
            self.start_age,
            seed.money,
            seed.happiness,
            seed.health,
            seed.financial_iq,
        )
    }

    /// Decision generator over the configured or built-in catalog
    pub fn generator(&self) -> DecisionGenerator {
        let catalog = self.catalog.clone().unwrap_or_else(Catalog::builtin);
        DecisionGenerator::new(Arc::new(catalog), self.random_event_chance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        config.validate().unwrap();

        let player = config.initial_player();
        assert_eq!(player.age(), 16);
        assert_eq!(player.money(), 1000);
        assert_eq!(player.happiness(), 70);
        assert_eq!(player.health(), 90);
        assert_eq!(player.financial_iq(), 20);
        assert_eq!(config.generator().random_event_chance(), 0.3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"random_event_chance": 0.5}"#).unwrap();
        assert_eq!(config.random_event_chance, 0.5);
        assert_eq!(config.start_age, DEFAULT_START_AGE);
        assert_eq!(config.terminal_age, DEFAULT_TERMINAL_AGE);
        assert_eq!(config.achievements.len(), 5);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_starting_stats_from_json() {
        let config =
            GameConfig::from_json(r#"{"starting_stats": {"money": 0, "financialIQ": 50}}"#).unwrap();
        let player = config.initial_player();
        assert_eq!(player.money(), 0);
        assert_eq!(player.financial_iq(), 50);
        assert_eq!(player.happiness(), 70);
    }

    #[test]
    fn test_judge_levels_sorted_after_load() {
        let json = r#"{"judge": {"health": [
            {"min": 0, "grade": 0, "text": "low"},
            {"min": 50, "grade": 1, "text": "high"}
        ]}}"#;
        let config = GameConfig::from_json(json).unwrap();
        let levels = &config.judge[&Stat::Health];
        assert_eq!(levels[0].min, 50);
        assert_eq!(levels[1].min, 0);
    }

    #[test]
    fn test_rejects_bad_chance() {
        let err = GameConfig::from_json(r#"{"random_event_chance": 1.5}"#).unwrap_err();
        assert!(matches!(err, FinLifeError::DeserializationError(_)));
    }

    #[test]
    fn test_rejects_bad_ages() {
        assert!(GameConfig::from_json(r#"{"start_age": 30, "terminal_age": 20}"#).is_err());
    }

    #[test]
    fn test_rejects_bad_condition() {
        let json = r#"{"achievements": [
            {"id": "x", "name": "X", "opportunity": "START", "condition": "MNY"}
        ]}"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert!(matches!(err, FinLifeError::InvalidCondition(_)));
    }

    #[test]
    fn test_rejects_unknown_condition_property() {
        let json = r#"{"achievements": [
            {"id": "x", "name": "X", "opportunity": "SUMMARY", "condition": "MONEY>=1000"}
        ]}"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert!(matches!(err, FinLifeError::InvalidCondition(_)));
    }

    #[test]
    fn test_option_list_condition_with_spaces() {
        let json = r#"{"achievements": [
            {"id": "x", "name": "X", "opportunity": "TRAJECTORY", "condition": "OPT?[tutor, babysit]"}
        ]}"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.achievements[0].condition, "OPT?[tutor, babysit]");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FinLifeError::DeserializationError(_)));
    }

    #[test]
    fn test_custom_catalog() {
        let json = r#"{"catalog": {"bands": [{"min_age": 30, "max_age": 30, "pool": [{
            "id": "house",
            "title": "Buy a House?",
            "description": "Rates are low.",
            "options": [
                {"id": "buy", "text": "Buy", "effects": {"money": -20000, "happiness": 10}, "consequence": "You own a home."},
                {"id": "rent", "text": "Keep renting", "consequence": "Flexibility stays."}
            ]
        }]}]}}"#;
        let config = GameConfig::from_json(json).unwrap();
        let generator = config.generator();
        assert_eq!(generator.catalog().band_for(30).unwrap().pool[0].id, "house");
        assert!(generator.catalog().band_for(16).is_none());
        assert!(generator.catalog().random_events.is_empty());
    }

    #[test]
    fn test_rejects_invalid_catalog() {
        let json = r#"{"catalog": {"random_events": [{
            "id": "solo",
            "title": "Only one way",
            "description": "",
            "options": [{"id": "a", "text": "A", "consequence": ""}]
        }]}}"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert!(matches!(err, FinLifeError::InvalidCatalog(_)));
    }
}
