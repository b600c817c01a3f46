//! Decision content: scripted age bands and the random-event pool

use serde::{Deserialize, Serialize};

use super::model::{Decision, DecisionOption};
use crate::error::{FinLifeError, Result};
use crate::stats::StatEffects;

/// A contiguous age range with a pool of scripted decisions.
/// One decision is drawn uniformly from the pool per age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBand {
    pub min_age: u32,
    pub max_age: u32,
    pub pool: Vec<Decision>,
}

impl AgeBand {
    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// All decision content the generator can draw from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub bands: Vec<AgeBand>,
    #[serde(default)]
    pub random_events: Vec<Decision>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Band covering an age, if any
    pub fn band_for(&self, age: u32) -> Option<&AgeBand> {
        self.bands.iter().find(|band| band.contains(age))
    }

    /// Validate band ranges, pools and every decision
    pub fn validate(&self) -> Result<()> {
        for (i, band) in self.bands.iter().enumerate() {
            if band.min_age > band.max_age {
                return Err(FinLifeError::InvalidCatalog(format!(
                    "age band {}..={} is empty",
                    band.min_age, band.max_age
                )));
            }
            if band.pool.is_empty() {
                return Err(FinLifeError::InvalidCatalog(format!(
                    "age band {}..={} has no decisions",
                    band.min_age, band.max_age
                )));
            }
            if let Some(other) = self.bands[..i]
                .iter()
                .find(|other| other.min_age <= band.max_age && band.min_age <= other.max_age)
            {
                return Err(FinLifeError::InvalidCatalog(format!(
                    "age band {}..={} overlaps {}..={}",
                    band.min_age, band.max_age, other.min_age, other.max_age
                )));
            }
            for decision in &band.pool {
                decision.validate()?;
            }
        }

        for decision in &self.random_events {
            decision.validate()?;
        }

        Ok(())
    }

    /// The FinLife story content
    pub fn builtin() -> Self {
        Self {
            bands: vec![
                AgeBand {
                    min_age: 16,
                    max_age: 16,
                    pool: vec![first_job()],
                },
                AgeBand {
                    min_age: 17,
                    max_age: 17,
                    pool: vec![education_choice()],
                },
                AgeBand {
                    min_age: 18,
                    max_age: 18,
                    pool: vec![credit_card_offer()],
                },
                AgeBand {
                    min_age: 19,
                    max_age: 22,
                    pool: vec![part_time_job()],
                },
                AgeBand {
                    min_age: 23,
                    max_age: 26,
                    pool: vec![first_career_job()],
                },
            ],
            random_events: vec![unexpected_expense()],
        }
    }
}

fn decision(id: &str, title: &str, description: &str, options: Vec<DecisionOption>) -> Decision {
    Decision {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        options,
    }
}

fn first_job() -> Decision {
    decision(
        "first-job",
        "Your First Job Opportunity",
        "You've just turned 16 and several job opportunities have come your way. Each choice will shape your financial future differently.",
        vec![
            DecisionOption::new(
                "fast-food",
                "Work at a fast-food restaurant",
                StatEffects::new(2000, -5, -5, 5),
                "You learn the value of hard work and basic money management, but the hours are long and tiring.",
            ),
            DecisionOption::new(
                "babysit",
                "Start a babysitting business",
                StatEffects::new(1500, 10, 5, 15),
                "You develop entrepreneurial skills and enjoy working with kids, building valuable business experience.",
            ),
            DecisionOption::new(
                "tutor",
                "Tutor younger students",
                StatEffects::new(1800, 15, 0, 20),
                "You strengthen your own knowledge while helping others, and parents pay well for quality tutoring.",
            ),
        ],
    )
}

fn education_choice() -> Decision {
    decision(
        "education-choice",
        "Planning Your Education",
        "As you approach graduation, you need to decide how to continue your education and what financial commitments you're willing to make.",
        vec![
            DecisionOption::new(
                "community-college",
                "Attend community college",
                StatEffects::new(-5000, 5, 0, 25),
                "You save money on tuition while getting quality education and keeping your options open for transfer.",
            ),
            DecisionOption::new(
                "state-university",
                "Go to state university",
                StatEffects::new(-15000, 15, 5, 35),
                "You get the full college experience and valuable networking opportunities, but take on significant debt.",
            ),
            DecisionOption::new(
                "trade-school",
                "Enroll in trade school",
                StatEffects::new(-8000, 10, -5, 20),
                "You learn practical skills that are in high demand and can start earning good money quickly.",
            ),
        ],
    )
}

fn credit_card_offer() -> Decision {
    decision(
        "credit-card-offer",
        "Your First Credit Card Offer",
        "A credit card company is offering you a card with a $1,000 limit. How do you handle this financial milestone?",
        vec![
            DecisionOption::new(
                "accept-responsible",
                "Accept and use it responsibly for small purchases",
                StatEffects::new(0, 5, 0, 30),
                "You build good credit history by making small purchases and paying them off in full each month.",
            ),
            DecisionOption::new(
                "decline",
                "Decline the offer and stick to cash",
                StatEffects::new(0, -5, 0, 10),
                "You avoid potential debt but miss the opportunity to build credit history early.",
            ),
            DecisionOption::new(
                "accept-splurge",
                "Accept and use it for a shopping spree",
                StatEffects::new(-800, 20, 0, -10),
                "You enjoy immediate gratification but rack up debt and learn bad financial habits.",
            ),
        ],
    )
}

fn part_time_job() -> Decision {
    decision(
        "part-time-job",
        "Balancing Work and Studies",
        "You need to decide how to balance earning money with your education and personal life.",
        vec![
            DecisionOption::new(
                "work-study",
                "Take a work-study position on campus",
                StatEffects::new(3000, 10, 0, 15),
                "You earn money while staying close to your studies and building campus connections.",
            ),
            DecisionOption::new(
                "retail-job",
                "Work retail nights and weekends",
                StatEffects::new(5000, -10, -10, 10),
                "You earn good money but your studies and health suffer from the demanding schedule.",
            ),
            DecisionOption::new(
                "focus-studies",
                "Focus entirely on studies",
                StatEffects::new(-2000, 5, 10, 25),
                "Your grades improve and you feel healthier, but you miss out on work experience and income.",
            ),
        ],
    )
}

fn first_career_job() -> Decision {
    decision(
        "first-career-job",
        "Your First Real Job",
        "You've graduated and received several job offers. Each comes with different salary levels and growth opportunities.",
        vec![
            DecisionOption::new(
                "startup",
                "Join a promising startup with equity",
                StatEffects::new(8000, 15, -5, 35),
                "You take a lower salary for potential big returns, learning valuable skills in a fast-paced environment.",
            ),
            DecisionOption::new(
                "corporate",
                "Take a stable corporate position",
                StatEffects::new(15000, 5, 5, 20),
                "You enjoy steady income and good benefits, building a solid foundation for your career.",
            ),
            DecisionOption::new(
                "nonprofit",
                "Work for a nonprofit organization",
                StatEffects::new(5000, 25, 10, 15),
                "You earn less money but find deep fulfillment in meaningful work that helps others.",
            ),
        ],
    )
}

fn unexpected_expense() -> Decision {
    decision(
        "unexpected-expense",
        "Unexpected Car Repair",
        "Your car breaks down and needs $800 in repairs. How do you handle this financial emergency?",
        vec![
            DecisionOption::new(
                "emergency-fund",
                "Use your emergency fund",
                StatEffects::new(-800, 5, 0, 10),
                "You handle the crisis calmly thanks to your financial planning and quickly rebuild your emergency fund.",
            ),
            DecisionOption::new(
                "credit-card-debt",
                "Put it on credit card",
                StatEffects::new(-800, -10, -5, -5),
                "You cover the expense but add to your debt burden and stress about the monthly payments.",
            ),
            DecisionOption::new(
                "borrow-money",
                "Borrow from family/friends",
                StatEffects::new(-500, -15, -5, 0),
                "You get help but feel embarrassed about your financial situation and strain relationships.",
            ),
        ],
    )
}
