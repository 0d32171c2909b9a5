//! Baseline-relative delta helpers shared by all calculators

/// Signed dollar difference against the baseline value
pub fn dollar_delta(value: f64, baseline: f64) -> f64 {
    value - baseline
}

/// Signed percent difference against the baseline value.
///
/// A baseline of zero yields 0, never NaN or Infinity. The guard is
/// intentional and load-bearing: downstream rendering and persistence
/// assume every delta is a finite number.
pub fn percent_delta(value: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (value - baseline) / baseline * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_delta() {
        assert!((percent_delta(14_400.0, 12_000.0) - 20.0).abs() < 1e-10);
        assert!((percent_delta(9_600.0, 12_000.0) + 20.0).abs() < 1e-10);
        assert_eq!(percent_delta(12_000.0, 12_000.0), 0.0);
    }

    #[test]
    fn test_zero_baseline_guard() {
        let pct = percent_delta(5_000.0, 0.0);
        assert_eq!(pct, 0.0);
        assert!(pct.is_finite());
    }

    #[test]
    fn test_dollar_delta_sign() {
        assert!(dollar_delta(14_400.0, 12_000.0) > 0.0);
        assert!(dollar_delta(9_600.0, 12_000.0) < 0.0);
        assert_eq!(dollar_delta(12_000.0, 12_000.0), 0.0);
    }
}
