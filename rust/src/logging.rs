//! Logging macros for the analysis passes with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0). Output goes to
//! stderr so it never mixes with reports written to stdout.
//! - 0: SILENT (only errors)
//! - 1: CHANGES (graph summary, project duration, critical chains)
//! - 2: CHECKS (per-task timings as each pass assigns them)
//! - 3: DEBUG (worklist internals, edge classification)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at CHANGES level (verbosity >= 1).
///
/// Used for: stage summaries and final results.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
///
/// Used for: per-task values computed by the passes.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: topological worklist and chain enumeration details.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(VERBOSITY_SILENT < VERBOSITY_CHANGES);
        assert!(VERBOSITY_CHANGES < VERBOSITY_CHECKS);
        assert!(VERBOSITY_CHECKS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_silent() {
        let verbosity = VERBOSITY_SILENT;
        log_changes!(verbosity, "duration {}", 49);
        log_checks!(verbosity, "task {}", "A");
        log_debug!(verbosity, "queue {:?}", [0usize, 1]);
    }
}
