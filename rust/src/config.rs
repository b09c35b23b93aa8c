//! Configuration types for schedule analysis.

use rust_decimal::Decimal;

use crate::logging::VERBOSITY_SILENT;

/// Configuration for a CPM analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    /// Absolute tolerance when testing slack against zero.
    ///
    /// Defaults to zero: a task is critical only when its slack is exactly
    /// zero. Times are exact decimals, so `0.1 + 0.2` meets `0.3` without
    /// any tolerance. A positive value treats near-critical tasks (slack up
    /// to the tolerance) as critical.
    pub slack_tolerance: Decimal,
    /// Maximum number of critical chains to enumerate (None = all).
    ///
    /// Critical task flags are always complete; this only bounds the chain
    /// listing on graphs with many parallel zero-slack paths.
    pub max_critical_paths: Option<usize>,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            slack_tolerance: Decimal::ZERO,
            max_critical_paths: None,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl AnalysisConfig {
    /// Test whether a slack (or a difference of times) counts as zero.
    #[inline]
    pub fn is_zero(&self, value: Decimal) -> bool {
        if self.slack_tolerance.is_zero() {
            value.is_zero()
        } else {
            value.abs() <= self.slack_tolerance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.slack_tolerance, Decimal::ZERO);
        assert_eq!(config.max_critical_paths, None);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_exact_zero_by_default() {
        let config = AnalysisConfig::default();
        assert!(config.is_zero(Decimal::ZERO));
        assert!(config.is_zero(-Decimal::ZERO));
        assert!(!config.is_zero(Decimal::new(1, 12)));
        assert!(config.is_zero(
            (Decimal::new(1, 1) + Decimal::new(2, 1)) - Decimal::new(3, 1)
        ));
    }

    #[test]
    fn test_tolerance_opt_in() {
        let config = AnalysisConfig {
            slack_tolerance: Decimal::new(1, 2),
            ..AnalysisConfig::default()
        };
        assert!(config.is_zero(Decimal::new(5, 3)));
        assert!(config.is_zero(Decimal::new(-1, 2)));
        assert!(!config.is_zero(Decimal::new(5, 1)));
    }
}
