//! Decision generation per age

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::Catalog;
use super::model::DecisionQueue;

/// Default chance of appending a random event to an age's decisions
pub const DEFAULT_RANDOM_EVENT_CHANCE: f64 = 0.3;

/// Builds the decision queue for an age from a catalog
#[derive(Debug, Clone)]
pub struct DecisionGenerator {
    catalog: Arc<Catalog>,
    random_event_chance: f64,
}

impl Default for DecisionGenerator {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()), DEFAULT_RANDOM_EVENT_CHANCE)
    }
}

impl DecisionGenerator {
    /// `random_event_chance` is clamped into `[0, 1]`
    pub fn new(catalog: Arc<Catalog>, random_event_chance: f64) -> Self {
        let random_event_chance = if random_event_chance.is_nan() {
            0.0
        } else {
            random_event_chance.clamp(0.0, 1.0)
        };

        Self {
            catalog,
            random_event_chance,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn random_event_chance(&self) -> f64 {
        self.random_event_chance
    }

    /// Generate the decisions for `age`: at most one scripted decision drawn
    /// from the matching band, then a random event with `random_event_chance`.
    /// The result may be empty.
    pub fn generate<R: Rng + ?Sized>(&self, age: u32, rng: &mut R) -> DecisionQueue {
        let mut queue = DecisionQueue::new();

        if let Some(band) = self.catalog.band_for(age) {
            if let Some(decision) = band.pool.choose(rng) {
                queue.push(decision.clone());
            }
        }

        if rng.gen_bool(self.random_event_chance) {
            if let Some(event) = self.catalog.random_events.choose(rng) {
                queue.push(event.clone());
            }
        }

        tracing::debug!(age, decisions = queue.len(), "generated decisions");

        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ids(queue: &DecisionQueue) -> Vec<&str> {
        queue.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_age_16_starts_with_first_job() {
        let generator = DecisionGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let queue = generator.generate(16, &mut rng);
            assert_eq!(queue[0].id, "first-job");
            assert!(queue.len() <= 2);
        }
    }

    #[test]
    fn test_scripted_bands() {
        let generator = DecisionGenerator::new(Arc::new(Catalog::builtin()), 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(ids(&generator.generate(17, &mut rng)), vec!["education-choice"]);
        assert_eq!(ids(&generator.generate(18, &mut rng)), vec!["credit-card-offer"]);
        for age in 19..=22 {
            assert_eq!(ids(&generator.generate(age, &mut rng)), vec!["part-time-job"]);
        }
        for age in 23..=26 {
            assert_eq!(ids(&generator.generate(age, &mut rng)), vec!["first-career-job"]);
        }
        assert!(generator.generate(27, &mut rng).is_empty());
        assert!(generator.generate(66, &mut rng).is_empty());
    }

    #[test]
    fn test_certain_random_event_is_appended_last() {
        let generator = DecisionGenerator::new(Arc::new(Catalog::builtin()), 1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(
            ids(&generator.generate(18, &mut rng)),
            vec!["credit-card-offer", "unexpected-expense"]
        );
        assert_eq!(ids(&generator.generate(40, &mut rng)), vec!["unexpected-expense"]);
    }

    #[test]
    fn test_random_event_frequency() {
        let generator = DecisionGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 10_000;

        let mut hits = 0;
        for _ in 0..trials {
            let queue = generator.generate(40, &mut rng);
            assert!(queue.len() <= 1);
            if queue.iter().any(|d| d.id == "unexpected-expense") {
                hits += 1;
            }
        }

        let frequency = hits as f64 / trials as f64;
        assert!((frequency - 0.3).abs() < 0.03, "frequency {}", frequency);
    }

    #[test]
    fn test_age_20_always_scripted() {
        let generator = DecisionGenerator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..200 {
            let queue = generator.generate(20, &mut rng);
            assert_eq!(queue[0].id, "part-time-job");
        }
    }

    #[test]
    fn test_same_seed_same_queue() {
        let generator = DecisionGenerator::default();
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);

        for age in 16..70 {
            assert_eq!(generator.generate(age, &mut a), generator.generate(age, &mut b));
        }
    }

    #[test]
    fn test_chance_is_clamped() {
        let generator = DecisionGenerator::new(Arc::new(Catalog::builtin()), 4.0);
        assert_eq!(generator.random_event_chance(), 1.0);
        let generator = DecisionGenerator::new(Arc::new(Catalog::builtin()), f64::NAN);
        assert_eq!(generator.random_event_chance(), 0.0);
    }
}
