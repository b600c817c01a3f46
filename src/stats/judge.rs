//! Stat judging, life phases and progress through the game

use serde::Serialize;

use super::effects::Stat;
use crate::config::JudgeLevel;

/// Judged value of a single stat
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatJudge {
    pub stat: Stat,
    pub value: i64,
    pub grade: i32,
    pub text: String,
    /// Fill ratio of the stat bar (0.0 to 1.0)
    pub progress: f64,
}

/// Find the judge level for a value: the highest `min` the value reaches.
/// Levels may come in any order.
pub fn judge_stat(levels: &[JudgeLevel], stat: Stat, value: i64) -> Option<StatJudge> {
    let level = levels
        .iter()
        .filter(|level| value >= level.min)
        .max_by_key(|level| level.min)?;

    Some(StatJudge {
        stat,
        value,
        grade: level.grade,
        text: level.text.clone(),
        progress: bar_progress(stat, value),
    })
}

/// Bar fill for a stat. Money fills against $100,000 with a 5% minimum sliver.
pub fn bar_progress(stat: Stat, value: i64) -> f64 {
    match stat {
        Stat::Money => (value as f64 / 100_000.0).clamp(0.05, 1.0),
        _ => (value as f64 / 100.0).clamp(0.0, 1.0),
    }
}

/// Stage of life derived from age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifePhase {
    HighSchool,
    CollegeYears,
    EarlyCareer,
    BuildingWealth,
    PrimeEarning,
    PreRetirement,
    GoldenYears,
}

impl LifePhase {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => LifePhase::HighSchool,
            18..=22 => LifePhase::CollegeYears,
            23..=29 => LifePhase::EarlyCareer,
            30..=39 => LifePhase::BuildingWealth,
            40..=49 => LifePhase::PrimeEarning,
            50..=59 => LifePhase::PreRetirement,
            _ => LifePhase::GoldenYears,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LifePhase::HighSchool => "High School",
            LifePhase::CollegeYears => "College Years",
            LifePhase::EarlyCareer => "Early Career",
            LifePhase::BuildingWealth => "Building Wealth",
            LifePhase::PrimeEarning => "Prime Earning",
            LifePhase::PreRetirement => "Pre-Retirement",
            LifePhase::GoldenYears => "Golden Years",
        }
    }
}

/// Percentage of the playable life span already lived, in `[0, 100]`
pub fn life_progress(age: u32, start_age: u32, terminal_age: u32) -> f64 {
    if terminal_age <= start_age {
        return 100.0;
    }
    let lived = age.saturating_sub(start_age) as f64;
    let span = (terminal_age - start_age) as f64;
    (lived / span * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_judge_levels;

    #[test]
    fn test_life_phase_boundaries() {
        assert_eq!(LifePhase::from_age(16), LifePhase::HighSchool);
        assert_eq!(LifePhase::from_age(18), LifePhase::CollegeYears);
        assert_eq!(LifePhase::from_age(22), LifePhase::CollegeYears);
        assert_eq!(LifePhase::from_age(23), LifePhase::EarlyCareer);
        assert_eq!(LifePhase::from_age(30), LifePhase::BuildingWealth);
        assert_eq!(LifePhase::from_age(45), LifePhase::PrimeEarning);
        assert_eq!(LifePhase::from_age(59), LifePhase::PreRetirement);
        assert_eq!(LifePhase::from_age(60).label(), "Golden Years");
    }

    #[test]
    fn test_life_progress() {
        assert_eq!(life_progress(16, 16, 65), 0.0);
        assert_eq!(life_progress(65, 16, 65), 100.0);
        assert_eq!(life_progress(80, 16, 65), 100.0);
        let mid = life_progress(40, 16, 65);
        assert!((mid - 48.979).abs() < 0.01);
    }

    #[test]
    fn test_judge_bounded_tiers() {
        let levels = default_judge_levels();
        let happiness = &levels[&Stat::Happiness];

        assert_eq!(judge_stat(happiness, Stat::Happiness, 85).unwrap().grade, 3);
        assert_eq!(judge_stat(happiness, Stat::Happiness, 80).unwrap().grade, 3);
        assert_eq!(judge_stat(happiness, Stat::Happiness, 60).unwrap().grade, 2);
        assert_eq!(judge_stat(happiness, Stat::Happiness, 40).unwrap().grade, 1);
        assert_eq!(judge_stat(happiness, Stat::Happiness, 0).unwrap().grade, 0);
    }

    #[test]
    fn test_judge_ignores_level_order() {
        let mut ascending = default_judge_levels()[&Stat::Health].clone();
        ascending.sort_by_key(|level| level.min);

        assert_eq!(judge_stat(&ascending, Stat::Health, 90).unwrap().grade, 3);
        assert_eq!(judge_stat(&ascending, Stat::Health, 65).unwrap().grade, 2);
        assert_eq!(judge_stat(&ascending, Stat::Health, 10).unwrap().grade, 0);
    }

    #[test]
    fn test_judge_below_all_levels() {
        let levels = vec![JudgeLevel {
            min: 10,
            grade: 1,
            text: "ok".to_string(),
        }];
        assert!(judge_stat(&levels, Stat::Health, 5).is_none());
    }

    #[test]
    fn test_money_bar_has_minimum_sliver() {
        assert_eq!(bar_progress(Stat::Money, 0), 0.05);
        assert_eq!(bar_progress(Stat::Money, 50_000), 0.5);
        assert_eq!(bar_progress(Stat::Money, 500_000), 1.0);
        assert_eq!(bar_progress(Stat::Health, 90), 0.9);
    }
}
