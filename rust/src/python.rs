//! Python bindings, built with the `python` feature.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

use crate::config::SolverConfig;
use crate::parser::parse_colony;
use crate::solver::solve;

/// Solver configuration (PyO3 wrapper).
#[pyclass(name = "SolverConfig")]
#[derive(Clone, Debug)]
pub struct PySolverConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=detail, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

#[pymethods]
impl PySolverConfig {
    #[new]
    #[pyo3(signature = (verbosity=0))]
    fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    fn __repr__(&self) -> String {
        format!("SolverConfig(verbosity={})", self.verbosity)
    }
}

impl From<&PySolverConfig> for SolverConfig {
    fn from(config: &PySolverConfig) -> Self {
        SolverConfig::with_verbosity(config.verbosity)
    }
}

/// Parse a colony description and return the winning schedule, one turn per line.
///
/// # Raises
/// * ValueError if the input is malformed or no schedule exists
#[pyfunction]
#[pyo3(signature = (text, config=None))]
fn solve_colony(text: &str, config: Option<PySolverConfig>) -> PyResult<Vec<String>> {
    let config = config
        .as_ref()
        .map(SolverConfig::from)
        .unwrap_or_default();

    let colony = parse_colony(text)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    match solve(&colony, &config) {
        Ok(solution) => Ok(solution.lines()),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The anthill Python module.
#[pymodule]
fn anthill(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolverConfig>()?;
    m.add_function(wrap_pyfunction!(solve_colony, m)?)?;
    Ok(())
}
