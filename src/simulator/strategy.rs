//! Choice strategies for autoplay

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::decision::{Decision, DecisionOption};
use crate::stats::{PlayerState, Stat};

/// Picks an option for a presented decision
pub trait ChoiceStrategy {
    /// `None` only when the decision has no options
    fn choose<'d>(
        &mut self,
        decision: &'d Decision,
        player: &PlayerState,
    ) -> Option<&'d DecisionOption>;

    fn name(&self) -> String;
}

/// Always the first listed option
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOption;

impl ChoiceStrategy for FirstOption {
    fn choose<'d>(
        &mut self,
        decision: &'d Decision,
        _player: &PlayerState,
    ) -> Option<&'d DecisionOption> {
        decision.options.first()
    }

    fn name(&self) -> String {
        "first".to_string()
    }
}

/// Uniformly random option
#[derive(Debug, Clone)]
pub struct RandomChoice<R = ChaCha8Rng> {
    rng: R,
}

impl RandomChoice<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChoice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoiceStrategy for RandomChoice<R> {
    fn choose<'d>(
        &mut self,
        decision: &'d Decision,
        _player: &PlayerState,
    ) -> Option<&'d DecisionOption> {
        decision.options.choose(&mut self.rng)
    }

    fn name(&self) -> String {
        "random".to_string()
    }
}

/// Option with the largest delta for one stat; ties go to the earlier option
#[derive(Debug, Clone, Copy)]
pub struct MaximizeStat(pub Stat);

impl ChoiceStrategy for MaximizeStat {
    fn choose<'d>(
        &mut self,
        decision: &'d Decision,
        _player: &PlayerState,
    ) -> Option<&'d DecisionOption> {
        let stat = self.0;
        decision
            .options
            .iter()
            .rev()
            .max_by_key(|option| option.effects.delta(stat))
    }

    fn name(&self) -> String {
        format!("max-{}", self.0.key())
    }
}

/// Build a strategy from its name: `first`, `random`, or a stat key such as
/// `money` or `financialIQ`
pub fn strategy_from_name(name: &str, seed: u64) -> Option<Box<dyn ChoiceStrategy + Send>> {
    match name {
        "first" => Some(Box::new(FirstOption)),
        "random" => Some(Box::new(RandomChoice::seeded(seed))),
        other => Stat::from_key(other)
            .map(|stat| Box::new(MaximizeStat(stat)) as Box<dyn ChoiceStrategy + Send>),
    }
}

impl<S: ChoiceStrategy + ?Sized> ChoiceStrategy for Box<S> {
    fn choose<'d>(
        &mut self,
        decision: &'d Decision,
        player: &PlayerState,
    ) -> Option<&'d DecisionOption> {
        (**self).choose(decision, player)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
