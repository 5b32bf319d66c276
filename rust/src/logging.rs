//! Verbosity-gated progress logging on stderr.
//!
//! Stdout carries the schedule, so every log line goes to stderr.
//! Levels:
//! - 0: SILENT
//! - 1: SUMMARY (per-strategy route and turn counts, chosen strategy)
//! - 2: DETAIL (each route found, each ant placement)
//! - 3: DEBUG (room-by-room walk, candidate counts)
//!
//! Message arguments are only evaluated when the level is enabled, so
//! callers may format routes inline.

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_DETAIL: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Whether a message at `level` is shown under `verbosity`.
#[inline]
pub const fn enabled(verbosity: u8, level: u8) -> bool {
    level != VERBOSITY_SILENT && verbosity >= level
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $level) {
            eprintln!($($arg)*);
        }
    };
}

/// Log at SUMMARY level (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_SUMMARY, $verbosity, $($arg)*)
    };
}

/// Log at DETAIL level (verbosity >= 2).
#[macro_export]
macro_rules! log_detail {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_DETAIL, $verbosity, $($arg)*)
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_DEBUG, $verbosity, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_thresholds() {
        assert!(!enabled(VERBOSITY_SILENT, VERBOSITY_SUMMARY));
        assert!(enabled(VERBOSITY_SUMMARY, VERBOSITY_SUMMARY));
        assert!(!enabled(VERBOSITY_SUMMARY, VERBOSITY_DETAIL));
        assert!(enabled(VERBOSITY_DEBUG, VERBOSITY_DETAIL));
        assert!(!enabled(VERBOSITY_DEBUG, VERBOSITY_SILENT));
    }

    #[test]
    fn test_disabled_levels_skip_argument_evaluation() {
        let mut formatted = 0;
        let mut route = || {
            formatted += 1;
            "start-a-end"
        };

        log_detail!(VERBOSITY_SUMMARY, "route {}", route());
        log_debug!(VERBOSITY_DETAIL, "route {}", route());
        assert_eq!(formatted, 0);
    }
}
