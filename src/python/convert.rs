//! Conversions from core types into Python dicts and lists

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::achievement::AchievementInfo;
use crate::decision::{Decision, DecisionOption};
use crate::engine::Snapshot;
use crate::stats::{EffectLabel, PlayerState, Stat, StatEffects, StatJudge};

pub fn player_to_dict<'py>(py: Python<'py>, player: &PlayerState) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("age", player.age())?;
    dict.set_item("money", player.money())?;
    dict.set_item("happiness", player.happiness())?;
    dict.set_item("health", player.health())?;
    dict.set_item("financialIQ", player.financial_iq())?;
    dict.set_item("choices", PyList::new(py, player.choices())?)?;

    let peaks = PyDict::new(py);
    for stat in Stat::ALL {
        peaks.set_item(stat.key(), player.extremes(stat).high)?;
    }
    dict.set_item("peaks", peaks)?;
    Ok(dict)
}

pub fn effects_to_dict<'py>(py: Python<'py>, effects: &StatEffects) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (stat, delta) in effects.nonzero() {
        dict.set_item(stat.key(), delta)?;
    }
    Ok(dict)
}

pub fn labels_to_list<'py>(py: Python<'py>, labels: &[EffectLabel]) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for label in labels {
        let dict = PyDict::new(py);
        dict.set_item("stat", label.stat.key())?;
        dict.set_item("name", label.name)?;
        dict.set_item("text", &label.text)?;
        dict.set_item("positive", label.positive)?;
        list.append(dict)?;
    }
    Ok(list)
}

pub fn option_to_dict<'py>(py: Python<'py>, option: &DecisionOption) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", &option.id)?;
    dict.set_item("text", &option.text)?;
    dict.set_item("consequence", &option.consequence)?;
    dict.set_item("effects", effects_to_dict(py, &option.effects)?)?;
    Ok(dict)
}

pub fn decision_to_dict<'py>(py: Python<'py>, decision: &Decision) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", &decision.id)?;
    dict.set_item("title", &decision.title)?;
    dict.set_item("description", &decision.description)?;

    let options = PyList::empty(py);
    for option in &decision.options {
        options.append(option_to_dict(py, option)?)?;
    }
    dict.set_item("options", options)?;
    Ok(dict)
}

pub fn achievements_to_list<'py>(
    py: Python<'py>,
    achievements: &[AchievementInfo],
) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for achievement in achievements {
        let dict = PyDict::new(py);
        dict.set_item("id", &achievement.id)?;
        dict.set_item("name", &achievement.name)?;
        dict.set_item("description", &achievement.description)?;
        dict.set_item("icon", &achievement.icon)?;
        dict.set_item("grade", achievement.grade)?;
        list.append(dict)?;
    }
    Ok(list)
}

pub fn judge_to_dict<'py>(py: Python<'py>, judge: &StatJudge) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("stat", judge.stat.key())?;
    dict.set_item("value", judge.value)?;
    dict.set_item("grade", judge.grade)?;
    dict.set_item("text", &judge.text)?;
    dict.set_item("progress", judge.progress)?;
    dict.set_item("progress_bar", render_progress_bar(judge.progress))?;
    Ok(dict)
}

pub fn snapshot_to_dict<'py>(py: Python<'py>, snapshot: &Snapshot) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("player", player_to_dict(py, &snapshot.player)?)?;
    dict.set_item("phase", snapshot.phase.as_str())?;

    let decision = match snapshot.current_decision {
        Some(ref decision) => Some(decision_to_dict(py, decision)?),
        None => None,
    };
    dict.set_item("current_decision", decision)?;

    let last_choice = match snapshot.last_choice {
        Some(ref option) => Some(option_to_dict(py, option)?),
        None => None,
    };
    dict.set_item("last_choice", last_choice)?;
    dict.set_item("effect_labels", labels_to_list(py, &snapshot.effect_labels)?)?;

    dict.set_item("cursor", snapshot.cursor)?;
    dict.set_item("queue_len", snapshot.queue_len)?;
    dict.set_item("age_caption", snapshot.age_caption())?;
    dict.set_item("life_phase", snapshot.life_phase_label)?;
    dict.set_item("life_progress", snapshot.life_progress)?;
    dict.set_item("decisions_made", snapshot.decisions_made)?;
    dict.set_item("retired", snapshot.retired)?;

    let judges = PyList::empty(py);
    for judge in &snapshot.judges {
        judges.append(judge_to_dict(py, judge)?)?;
    }
    dict.set_item("judges", judges)?;
    dict.set_item("achievements", achievements_to_list(py, &snapshot.achievements)?)?;
    Ok(dict)
}

/// Render a progress bar string from a progress value (0.0 to 1.0)
/// Returns a 10-character string like "██████░░░░"
#[inline]
pub fn render_progress_bar(progress: f64) -> String {
    let filled = ((progress * 10.0).round().max(0.0) as usize).min(10);
    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
