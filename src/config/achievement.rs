//! Achievement configuration structures

use serde::{Deserialize, Serialize};

/// Achievement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub grade: i32,
    pub opportunity: Opportunity,
    /// Condition language expression, e.g. `OPT?[emergency-fund]`
    pub condition: String,
}

/// When an achievement is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Opportunity {
    /// Once, when a new life starts
    Start,
    /// After every choice and every age advance
    Trajectory,
    /// When a life summary is produced
    Summary,
}

impl Opportunity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "START" => Some(Opportunity::Start),
            "TRAJECTORY" => Some(Opportunity::Trajectory),
            "SUMMARY" => Some(Opportunity::Summary),
            _ => None,
        }
    }
}

fn achievement(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    grade: i32,
    opportunity: Opportunity,
    condition: &str,
) -> AchievementConfig {
    AchievementConfig {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        grade,
        opportunity,
        condition: condition.to_string(),
    }
}

/// The sidebar achievements of the FinLife game
pub fn default_achievements() -> Vec<AchievementConfig> {
    vec![
        achievement(
            "first-job",
            "First Job",
            "Took your first paying job",
            "💼",
            0,
            Opportunity::Trajectory,
            "OPT?[fast-food,babysit,tutor]",
        ),
        achievement(
            "emergency-fund",
            "Emergency Fund",
            "Covered an emergency from savings",
            "🛡️",
            1,
            Opportunity::Trajectory,
            "OPT?[emergency-fund]",
        ),
        achievement(
            "investment-pro",
            "Investment Pro",
            "Reached a Financial IQ of 80",
            "📈",
            2,
            Opportunity::Trajectory,
            "FIQ>=80",
        ),
        achievement(
            "debt-free",
            "Debt Free",
            "Reached retirement without ever borrowing or carrying card debt",
            "✨",
            2,
            Opportunity::Summary,
            "OPT![credit-card-debt,accept-splurge,borrow-money]",
        ),
        achievement(
            "millionaire",
            "Millionaire",
            "Held a net worth of $1,000,000",
            "💎",
            3,
            Opportunity::Trajectory,
            "HMNY>=1000000",
        ),
    ]
}
