//! Command-line output for one colony file.

use crate::config::SolverConfig;
use crate::log_summary;
use crate::parser::parse_colony;
use crate::solver::{solve, SolveError};

/// Text destined for stdout plus the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output: String,
    pub exit_code: i32,
}

impl RunReport {
    fn success(output: String) -> Self {
        Self {
            output,
            exit_code: 0,
        }
    }

    fn failure(output: String) -> Self {
        Self {
            output,
            exit_code: 1,
        }
    }
}

/// Parse and solve `text`, rendering what the CLI prints.
///
/// A malformed file yields only its error line. Otherwise the input is
/// echoed (unless disabled) with one blank line after it, followed by
/// either the schedule or one line per failed strategy.
pub fn render(text: &str, config: &SolverConfig) -> RunReport {
    let colony = match parse_colony(text) {
        Ok(colony) => colony,
        Err(e) => return RunReport::failure(format!("ERROR: {}\n", e)),
    };
    log_summary!(
        config.verbosity,
        "Parsed {} rooms, {} tunnels",
        colony.rooms.len(),
        colony.tunnels.len()
    );

    let mut output = String::new();
    if config.echo_input {
        output.push_str(text.trim_end_matches('\n'));
        output.push_str("\n\n");
    }

    match solve(&colony, config) {
        Ok(solution) => {
            output.push_str(&solution.schedule.to_string());
            RunReport::success(output)
        }
        Err(SolveError::Unsolvable { failed }) => {
            for strategy in failed {
                output.push_str(&format!("ERROR: {} strategy failed\n", strategy));
            }
            RunReport::failure(output)
        }
        Err(e) => {
            output.push_str(&format!("ERROR: {}\n", e));
            RunReport::failure(output)
        }
    }
}
