//! Player state structure and operations

use serde::{Deserialize, Serialize};

use super::effects::{Stat, StatEffects};

/// Lower bound shared by every stat
pub const STAT_MIN: i32 = 0;
/// Upper bound of happiness, health and financial IQ
pub const STAT_MAX: i32 = 100;

/// Lowest and highest value a stat has held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremes {
    pub low: i64,
    pub high: i64,
}

impl Extremes {
    #[inline]
    fn at(value: i64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    #[inline(always)]
    fn observe(&mut self, value: i64) {
        self.low = self.low.min(value);
        self.high = self.high.max(value);
    }
}

/// Player progression state. Stats are clamped on every mutation, so the
/// fields are only reachable through accessors. Deserialized values go
/// through the same clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPlayerState")]
pub struct PlayerState {
    age: u32,
    money: i64,
    happiness: i32,
    health: i32,
    #[serde(rename = "financialIQ")]
    financial_iq: i32,
    /// Ids of every chosen option, oldest first
    choices: Vec<String>,
    /// Extremes per stat, indexed by `Stat::index`
    extremes: [Extremes; 4],
}

/// Wire form of `PlayerState` before clamping
#[derive(Deserialize)]
struct RawPlayerState {
    age: u32,
    money: i64,
    happiness: i32,
    health: i32,
    #[serde(rename = "financialIQ")]
    financial_iq: i32,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    extremes: Option<[Extremes; 4]>,
}

impl From<RawPlayerState> for PlayerState {
    fn from(raw: RawPlayerState) -> Self {
        let mut state = PlayerState::new(
            raw.age,
            raw.money,
            raw.happiness,
            raw.health,
            raw.financial_iq,
        );
        state.choices = raw.choices;

        if let Some(extremes) = raw.extremes {
            for stat in Stat::ALL {
                let seen = extremes[stat.index()];
                let value = state.stat(stat);
                let slot = &mut state.extremes[stat.index()];
                *slot = Extremes::at(clamp_stat(stat, seen.low));
                slot.observe(clamp_stat(stat, seen.high));
                slot.observe(value);
            }
        }

        state
    }
}

impl PlayerState {
    /// Create a new PlayerState, clamping the seed values into range
    pub fn new(age: u32, money: i64, happiness: i32, health: i32, financial_iq: i32) -> Self {
        let money = clamp_money(money);
        let happiness = clamp_bounded(happiness as i64);
        let health = clamp_bounded(health as i64);
        let financial_iq = clamp_bounded(financial_iq as i64);

        Self {
            age,
            money,
            happiness,
            health,
            financial_iq,
            choices: Vec::with_capacity(32),
            extremes: [
                Extremes::at(money),
                Extremes::at(happiness as i64),
                Extremes::at(health as i64),
                Extremes::at(financial_iq as i64),
            ],
        }
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn money(&self) -> i64 {
        self.money
    }

    #[inline]
    pub fn happiness(&self) -> i32 {
        self.happiness
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn financial_iq(&self) -> i32 {
        self.financial_iq
    }

    /// Option ids chosen so far
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Current value of a stat, widened to i64
    #[inline]
    pub fn stat(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Money => self.money,
            Stat::Happiness => self.happiness as i64,
            Stat::Health => self.health as i64,
            Stat::FinancialIq => self.financial_iq as i64,
        }
    }

    /// Lowest and highest value the stat has held (post-clamp)
    #[inline]
    pub fn extremes(&self, stat: Stat) -> Extremes {
        self.extremes[stat.index()]
    }

    /// Apply a set of deltas. All four stats are computed first and then
    /// committed together, so a snapshot never sees half of an effect.
    pub fn apply(&mut self, effects: &StatEffects) {
        let money = clamp_money(self.money.saturating_add(effects.money));
        let happiness = clamp_bounded(self.happiness as i64 + effects.happiness as i64);
        let health = clamp_bounded(self.health as i64 + effects.health as i64);
        let financial_iq = clamp_bounded(self.financial_iq as i64 + effects.financial_iq as i64);

        self.money = money;
        self.happiness = happiness;
        self.health = health;
        self.financial_iq = financial_iq;

        for stat in Stat::ALL {
            let value = self.stat(stat);
            self.extremes[stat.index()].observe(value);
        }
    }

    /// Record a chosen option id
    pub fn record_choice(&mut self, option_id: &str) {
        self.choices.push(option_id.to_string());
    }

    /// Whether an option with this id has ever been chosen
    pub fn has_chosen(&self, option_id: &str) -> bool {
        self.choices.iter().any(|c| c == option_id)
    }

    /// Move to the next year of life
    #[inline]
    pub fn advance_age(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    /// Summary score used by the life summary:
    /// happiness + health + financial IQ + money in thousands (capped at 100)
    pub fn summary_score(&self) -> i64 {
        let money_points = (self.extremes(Stat::Money).high / 1000).min(STAT_MAX as i64);
        self.happiness as i64 + self.health as i64 + self.financial_iq as i64 + money_points
    }
}

#[inline]
fn clamp_money(value: i64) -> i64 {
    value.max(0)
}

#[inline]
fn clamp_bounded(value: i64) -> i32 {
    value.clamp(STAT_MIN as i64, STAT_MAX as i64) as i32
}

fn clamp_stat(stat: Stat, value: i64) -> i64 {
    match stat {
        Stat::Money => clamp_money(value),
        _ => clamp_bounded(value) as i64,
    }
}
