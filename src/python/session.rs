//! Python classes: an interactive `GameSession` and an autoplayed `LifeReport`
//!
//! Both hold their data in Rust memory; Python reads it lazily through
//! methods that build dicts on demand.

use std::sync::Arc;

use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::convert::{
    achievements_to_list, judge_to_dict, option_to_dict, player_to_dict, snapshot_to_dict,
};
use crate::config::GameConfig;
use crate::engine::LifeDecisionEngine;
use crate::error::FinLifeError;
use crate::simulator::{LifeSummary, TrajectoryEntry};
use crate::stats::Stat;

// ============================================================================
// GameSession PyClass
// ============================================================================

/// One interactive life driven from Python
#[pyclass]
pub struct GameSession {
    engine: LifeDecisionEngine,
}

impl GameSession {
    pub fn from_config(config: Arc<GameConfig>, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self {
            engine: LifeDecisionEngine::with_config(config, rng),
        }
    }
}

#[pymethods]
impl GameSession {
    /// Start a new life with the cached config (or the defaults)
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let config = super::cached_config().unwrap_or_default();
        Self::from_config(config, seed.unwrap_or_else(rand::random))
    }

    #[getter]
    fn age(&self) -> u32 {
        self.engine.player().age()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        self.engine.phase().as_str()
    }

    #[getter]
    fn is_retired(&self) -> bool {
        self.engine.is_retired()
    }

    /// Everything the UI renders right now
    fn snapshot(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(snapshot_to_dict(py, &self.engine.snapshot())?.into())
    }

    /// Snapshot as a JSON string
    fn snapshot_json(&self) -> PyResult<String> {
        let json = serde_json::to_string(&self.engine.snapshot()).map_err(FinLifeError::from)?;
        Ok(json)
    }

    fn player(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(player_to_dict(py, self.engine.player())?.into())
    }

    /// Choose an option of the presented decision
    ///
    /// # Returns
    /// The chosen option dict
    ///
    /// # Raises
    /// RuntimeError outside the presenting phase, KeyError for an unknown option
    fn choose(&mut self, py: Python<'_>, option_id: &str) -> PyResult<Py<PyAny>> {
        let option = self.engine.choose_option(option_id)?;
        Ok(option_to_dict(py, option)?.into())
    }

    fn acknowledge(&mut self) -> PyResult<()> {
        Ok(self.engine.acknowledge_outcome()?)
    }

    fn advance_age(&mut self) -> PyResult<()> {
        Ok(self.engine.advance_age()?)
    }

    /// Acknowledge the outcome or start the next year, whichever applies
    fn continue_game(&mut self) -> PyResult<()> {
        Ok(self.engine.continue_game()?)
    }

    /// Achievements unlocked since the last call
    fn take_new_achievements(&mut self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let fresh = self.engine.take_new_achievements();
        Ok(achievements_to_list(py, &fresh)?.into())
    }

    /// Check end-of-life achievements and return the new ones
    fn summarize(&mut self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let fresh = self.engine.summarize();
        Ok(achievements_to_list(py, &fresh)?.into())
    }
}

// ============================================================================
// LifeReport PyClass
// ============================================================================

/// Pre-rendered year of an autoplayed life
#[derive(Debug, Clone)]
struct RenderedYear {
    age: u32,
    /// One line per decision, e.g. "First Job: Tutor younger students (+$1,800.00, +15%, +20%)"
    display_text: String,
    /// Stats at the close of the year in `Stat::ALL` order
    stats: [i64; 4],
    is_end: bool,
}

impl From<&TrajectoryEntry> for RenderedYear {
    fn from(entry: &TrajectoryEntry) -> Self {
        let lines: Vec<String> = entry
            .content
            .iter()
            .map(|c| {
                let labels: Vec<String> = c.effects.labels().into_iter().map(|l| l.text).collect();
                if labels.is_empty() {
                    format!("{}: {}", c.title, c.option_text)
                } else {
                    format!("{}: {} ({})", c.title, c.option_text, labels.join(", "))
                }
            })
            .collect();

        Self {
            age: entry.age,
            display_text: lines.join("\n"),
            stats: [
                entry.money,
                entry.happiness as i64,
                entry.health as i64,
                entry.financial_iq as i64,
            ],
            is_end: entry.is_end,
        }
    }
}

/// Result of an autoplayed life, held in Rust memory
#[pyclass]
pub struct LifeReport {
    trajectory: Vec<RenderedYear>,
    summary: LifeSummary,
}

impl LifeReport {
    pub fn new(summary: LifeSummary) -> Self {
        let trajectory = summary.trajectory.iter().map(RenderedYear::from).collect();
        Self {
            trajectory,
            summary,
        }
    }

    fn year_to_dict<'py>(&self, py: Python<'py>, year: &RenderedYear) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("age", year.age)?;
        dict.set_item("display_text", &year.display_text)?;

        let stats = PyDict::new(py);
        for stat in Stat::ALL {
            stats.set_item(stat.key(), year.stats[stat.index()])?;
        }
        dict.set_item("stats", stats)?;
        dict.set_item("is_end", year.is_end)?;
        Ok(dict)
    }
}

#[pymethods]
impl LifeReport {
    #[getter]
    fn total_years(&self) -> usize {
        self.trajectory.len()
    }

    #[getter]
    fn total_score(&self) -> i64 {
        self.summary.total_score
    }

    #[getter]
    fn final_age(&self) -> u32 {
        self.summary.final_player.age()
    }

    #[getter]
    fn strategy(&self) -> String {
        self.summary.strategy.clone()
    }

    #[getter]
    fn decisions_made(&self) -> usize {
        self.summary.decisions_made()
    }

    /// Year dict or None if out of bounds
    fn get_year(&self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        match self.trajectory.get(index) {
            Some(year) => Ok(self.year_to_dict(py, year)?.into()),
            None => Ok(py.None()),
        }
    }

    /// Years in `[start, end)`, clamped to the trajectory
    fn get_years_range(&self, py: Python<'_>, start: usize, end: usize) -> PyResult<Py<PyAny>> {
        let end = end.min(self.trajectory.len());
        let list = PyList::empty(py);
        if start >= end {
            return Ok(list.into());
        }

        for year in &self.trajectory[start..end] {
            list.append(self.year_to_dict(py, year)?)?;
        }
        Ok(list.into())
    }

    fn get_summary(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        dict.set_item("total_score", self.summary.total_score)?;
        dict.set_item("player", player_to_dict(py, &self.summary.final_player)?)?;

        let judges = PyList::empty(py);
        for judge in &self.summary.judges {
            judges.append(judge_to_dict(py, judge)?)?;
        }
        dict.set_item("judges", judges)?;
        Ok(dict.into())
    }

    fn get_achievements(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        Ok(achievements_to_list(py, &self.summary.achievements)?.into())
    }

    /// Whole summary as a JSON string
    fn to_json(&self) -> PyResult<String> {
        let json = serde_json::to_string(&self.summary).map_err(FinLifeError::from)?;
        Ok(json)
    }
}
