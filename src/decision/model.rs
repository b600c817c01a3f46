//! Decision and option value types

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{FinLifeError, Result};
use crate::stats::StatEffects;

/// Minimum number of options a decision presents
pub const MIN_OPTIONS: usize = 2;
/// Maximum number of options a decision presents
pub const MAX_OPTIONS: usize = 3;

/// One selectable choice of a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub effects: StatEffects,
    pub consequence: String,
}

/// A narrative choice point. Option order is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub description: String,
    pub options: Vec<DecisionOption>,
}

/// Decisions generated for one age: a scripted decision and a random event at most
pub type DecisionQueue = SmallVec<[Decision; 2]>;

impl Decision {
    /// Look up an option by id. Ids are only unique within one decision.
    pub fn option(&self, option_id: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Ids of the options in presentation order
    pub fn option_ids(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.id.as_str())
    }

    /// Check option count and option id uniqueness
    pub fn validate(&self) -> Result<()> {
        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(FinLifeError::InvalidCatalog(format!(
                "decision '{}' has {} options, expected {}..={}",
                self.id, count, MIN_OPTIONS, MAX_OPTIONS
            )));
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.id == option.id) {
                return Err(FinLifeError::InvalidCatalog(format!(
                    "decision '{}' repeats option id '{}'",
                    self.id, option.id
                )));
            }
        }

        Ok(())
    }
}

impl DecisionOption {
    pub fn new(id: &str, text: &str, effects: StatEffects, consequence: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            effects,
            consequence: consequence.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision_with(ids: &[&str]) -> Decision {
        Decision {
            id: "test".to_string(),
            title: "Test".to_string(),
            description: "A test decision".to_string(),
            options: ids
                .iter()
                .map(|id| DecisionOption::new(id, "text", StatEffects::default(), "consequence"))
                .collect(),
        }
    }

    #[test]
    fn test_option_lookup() {
        let decision = decision_with(&["a", "b"]);
        assert_eq!(decision.option("b").map(|o| o.id.as_str()), Some("b"));
        assert!(decision.option("c").is_none());
        assert_eq!(decision.option_ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_validate_option_count() {
        assert!(decision_with(&["a", "b"]).validate().is_ok());
        assert!(decision_with(&["a", "b", "c"]).validate().is_ok());
        assert!(matches!(
            decision_with(&["a"]).validate(),
            Err(FinLifeError::InvalidCatalog(_))
        ));
        assert!(decision_with(&["a", "b", "c", "d"]).validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let err = decision_with(&["a", "b", "a"]).validate().unwrap_err();
        assert!(err.to_string().contains("repeats option id 'a'"));
    }

    #[test]
    fn test_deserialize_option_without_effects() {
        let json = r#"{"id": "x", "text": "X", "consequence": "Nothing happens."}"#;
        let option: DecisionOption = serde_json::from_str(json).unwrap();
        assert!(option.effects.is_empty());
    }
}
