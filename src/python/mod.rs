//! Python bindings via PyO3
//!
//! Built with the `python` feature. The module is importable as `finlife_core`.

mod convert;
mod session;

pub use session::{GameSession, LifeReport};

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::condition::clear_cache;
use crate::config::GameConfig;
use crate::simulator::{simulate_life, strategy_from_name, LifeSummary};

// ============================================================================
// Cached Configuration
// ============================================================================

/// Global cached configuration
static CACHED_CONFIG: OnceCell<Arc<RwLock<Arc<GameConfig>>>> = OnceCell::new();

pub(crate) fn cached_config() -> Option<Arc<GameConfig>> {
    CACHED_CONFIG.get().map(|lock| lock.read().clone())
}

fn require_config() -> PyResult<Arc<GameConfig>> {
    cached_config().ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "Config not initialized. Call init_config() first.",
        )
    })
}

fn run_autoplay(config: Arc<GameConfig>, strategy: &str, seed: u64) -> PyResult<LifeSummary> {
    let mut chooser = strategy_from_name(strategy, seed).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Unknown strategy '{}'. Use 'first', 'random' or a stat name.",
            strategy
        ))
    })?;

    Ok(simulate_life(config, &mut chooser, ChaCha8Rng::seed_from_u64(seed))?)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the game configuration (call once at startup)
///
/// # Arguments
/// * `config_json` - Optional JSON document; missing fields use the defaults
///
/// # Raises
/// ValueError if the JSON is malformed or fails validation
#[pyfunction]
#[pyo3(signature = (config_json=None))]
fn init_config(config_json: Option<&str>) -> PyResult<()> {
    let config = match config_json {
        Some(json) => GameConfig::from_json(json)?,
        None => GameConfig::default(),
    };
    let config = Arc::new(config);

    // Conditions from the previous config are no longer needed
    clear_cache();

    if let Some(existing) = CACHED_CONFIG.get() {
        *existing.write() = config;
    } else {
        let _ = CACHED_CONFIG.set(Arc::new(RwLock::new(config)));
    }

    tracing::info!("Game config initialized");
    Ok(())
}

/// Check if config is initialized
#[pyfunction]
fn is_config_initialized() -> bool {
    CACHED_CONFIG.get().is_some()
}

/// Autoplay a complete life with the cached config
///
/// # Arguments
/// * `strategy` - "first", "random", or a stat name ("money", "happiness", "health", "financialIQ")
/// * `seed` - Optional RNG seed
///
/// # Raises
/// RuntimeError if `init_config` was not called first, ValueError for an unknown strategy
#[pyfunction]
#[pyo3(signature = (strategy="first", seed=None))]
fn simulate_full_life(strategy: &str, seed: Option<u64>) -> PyResult<LifeReport> {
    let config = require_config()?;
    let summary = run_autoplay(config, strategy, seed.unwrap_or_else(rand::random))?;
    Ok(LifeReport::new(summary))
}

/// Autoplay a complete life on a blocking thread
///
/// # Returns
/// A Python awaitable that resolves to a LifeReport
///
/// # Example (Python)
/// ```python
/// report = await simulate_async("financialIQ", seed=7)
/// print(report.total_score)
/// ```
#[pyfunction]
#[pyo3(signature = (strategy="first", seed=None))]
fn simulate_async<'py>(
    py: Python<'py>,
    strategy: String,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyAny>> {
    let config = require_config()?;
    let seed = seed.unwrap_or_else(rand::random);

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let report = tokio::task::spawn_blocking(move || {
            run_autoplay(config, &strategy, seed).map(LifeReport::new)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Simulation task panicked: {}",
                e
            ))
        })??;

        Ok(report)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn finlife_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_config, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_full_life, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_async, m)?)?;
    m.add_class::<GameSession>()?;
    m.add_class::<LifeReport>()?;
    Ok(())
}
