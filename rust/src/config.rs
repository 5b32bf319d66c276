//! Configuration types for the solver.

use crate::logging::{VERBOSITY_DEBUG, VERBOSITY_SILENT};

/// Configuration for a solver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=detail, 3=debug.
    pub verbosity: u8,
    /// Whether the CLI echoes the raw input before the schedule.
    pub echo_input: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            verbosity: VERBOSITY_SILENT,
            echo_input: true,
        }
    }
}

impl SolverConfig {
    /// Build a config with the given verbosity, clamped to the debug level.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity: verbosity.min(VERBOSITY_DEBUG),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_silent_and_echoes() {
        let config = SolverConfig::default();
        assert_eq!(config.verbosity, VERBOSITY_SILENT);
        assert!(config.echo_input);
    }

    #[test]
    fn test_verbosity_is_clamped() {
        assert_eq!(SolverConfig::with_verbosity(2).verbosity, 2);
        assert_eq!(SolverConfig::with_verbosity(9).verbosity, VERBOSITY_DEBUG);
    }
}
