//! Achievement checking logic

use ahash::AHashSet;
use serde::Serialize;

use crate::condition::cache::check_condition;
use crate::config::{AchievementConfig, Opportunity};
use crate::stats::PlayerState;

/// Achievement info for results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub grade: i32,
}

impl From<&AchievementConfig> for AchievementInfo {
    fn from(config: &AchievementConfig) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
            icon: config.icon.clone(),
            grade: config.grade,
        }
    }
}

/// Check achievements for a given opportunity, skipping ids already unlocked.
/// Results keep the configured order.
pub fn check_achievements(
    opportunity: Opportunity,
    state: &PlayerState,
    unlocked: &AHashSet<String>,
    achievements: &[AchievementConfig],
) -> Vec<AchievementInfo> {
    achievements
        .iter()
        .filter(|a| a.opportunity == opportunity)
        .filter(|a| !unlocked.contains(&a.id))
        .filter(|a| check_condition(&a.condition, state).unwrap_or(false))
        .map(AchievementInfo::from)
        .collect()
}

/// Tracks unlocked achievements across one life
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    unlocked: AHashSet<String>,
    order: Vec<AchievementInfo>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check one opportunity and unlock whatever holds. Returns the new unlocks.
    pub fn check(
        &mut self,
        opportunity: Opportunity,
        state: &PlayerState,
        achievements: &[AchievementConfig],
    ) -> Vec<AchievementInfo> {
        let fresh = check_achievements(opportunity, state, &self.unlocked, achievements);
        for info in &fresh {
            tracing::info!(achievement = %info.id, age = state.age(), "Achievement unlocked");
            self.unlocked.insert(info.id.clone());
            self.order.push(info.clone());
        }
        fresh
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Unlocked achievements, oldest first
    pub fn unlocked(&self) -> &[AchievementInfo] {
        &self.order
    }
}
