//! Stat keys and signed stat deltas

use serde::{Deserialize, Serialize};

/// One of the four player stats a decision can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "money")]
    Money,
    #[serde(rename = "happiness")]
    Happiness,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "financialIQ")]
    FinancialIq,
}

impl Stat {
    /// All stats in display order
    pub const ALL: [Stat; 4] = [Stat::Money, Stat::Happiness, Stat::Health, Stat::FinancialIq];

    /// Position of this stat in fixed-size per-stat arrays
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Stat::Money => 0,
            Stat::Happiness => 1,
            Stat::Health => 2,
            Stat::FinancialIq => 3,
        }
    }

    /// Key used in effect maps and JSON content
    pub const fn key(self) -> &'static str {
        match self {
            Stat::Money => "money",
            Stat::Happiness => "happiness",
            Stat::Health => "health",
            Stat::FinancialIq => "financialIQ",
        }
    }

    /// Short code used by the condition language
    pub const fn code(self) -> &'static str {
        match self {
            Stat::Money => "MNY",
            Stat::Happiness => "HAP",
            Stat::Health => "HLT",
            Stat::FinancialIq => "FIQ",
        }
    }

    /// Human readable name
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Money => "Net Worth",
            Stat::Happiness => "Happiness",
            Stat::Health => "Health",
            Stat::FinancialIq => "Financial IQ",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Stat::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Stat::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Whether the stat lives in `[0, 100]` (money only has a floor)
    #[inline]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Stat::Money)
    }
}

/// Signed stat deltas carried by a decision option. Absent keys deserialize to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEffects {
    pub money: i64,
    pub happiness: i32,
    pub health: i32,
    #[serde(rename = "financialIQ")]
    pub financial_iq: i32,
}

impl StatEffects {
    pub const fn new(money: i64, happiness: i32, health: i32, financial_iq: i32) -> Self {
        Self {
            money,
            happiness,
            health,
            financial_iq,
        }
    }

    /// Delta for a single stat, widened to i64
    #[inline]
    pub fn delta(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Money => self.money,
            Stat::Happiness => self.happiness as i64,
            Stat::Health => self.health as i64,
            Stat::FinancialIq => self.financial_iq as i64,
        }
    }

    /// Non-zero deltas in display order
    pub fn nonzero(&self) -> impl Iterator<Item = (Stat, i64)> + '_ {
        Stat::ALL
            .into_iter()
            .map(|stat| (stat, self.delta(stat)))
            .filter(|(_, delta)| *delta != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.nonzero().next().is_none()
    }

    /// Display labels for the non-zero deltas, e.g. `+$1,800.00` or `-5%`
    pub fn labels(&self) -> Vec<EffectLabel> {
        self.nonzero()
            .map(|(stat, delta)| EffectLabel {
                stat,
                name: stat.label(),
                text: format_delta(stat, delta),
                positive: delta > 0,
            })
            .collect()
    }
}

/// Formatted representation of one stat delta
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectLabel {
    pub stat: Stat,
    pub name: &'static str,
    pub text: String,
    pub positive: bool,
}

/// Format a delta the way the outcome view shows it
pub fn format_delta(stat: Stat, delta: i64) -> String {
    match stat {
        Stat::Money => {
            let sign = if delta < 0 { '-' } else { '+' };
            format!("{}${}.00", sign, group_thousands(delta.unsigned_abs()))
        }
        _ => {
            if delta > 0 {
                format!("+{}%", delta)
            } else {
                format!("{}%", delta)
            }
        }
    }
}

/// Format an unsigned money amount with thousands separators, e.g. `2,800`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_zero() {
        let effects: StatEffects = serde_json::from_str(r#"{"money": -800}"#).unwrap();
        assert_eq!(effects, StatEffects::new(-800, 0, 0, 0));
    }

    #[test]
    fn test_financial_iq_key() {
        let effects: StatEffects =
            serde_json::from_str(r#"{"financialIQ": 20, "happiness": 15}"#).unwrap();
        assert_eq!(effects.financial_iq, 20);
        assert_eq!(effects.delta(Stat::Happiness), 15);
    }

    #[test]
    fn test_labels_skip_zero() {
        let effects = StatEffects::new(1800, 15, 0, 20);
        let labels: Vec<String> = effects.labels().into_iter().map(|l| l.text).collect();
        assert_eq!(labels, vec!["+$1,800.00", "+15%", "+20%"]);
    }

    #[test]
    fn test_negative_labels() {
        assert_eq!(format_delta(Stat::Money, -15000), "-$15,000.00");
        assert_eq!(format_delta(Stat::Health, -5), "-5%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_stat_lookup() {
        assert_eq!(Stat::from_key("financialIQ"), Some(Stat::FinancialIq));
        assert_eq!(Stat::from_code("MNY"), Some(Stat::Money));
        assert_eq!(Stat::from_code("CHR"), None);
        assert!(!Stat::Money.is_bounded());
        assert!(Stat::Health.is_bounded());
    }
}
