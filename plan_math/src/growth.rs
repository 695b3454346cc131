//! Growth-rate calculations for historical series

use crate::{MathError, Result};

/// Compound annual growth rate, in percent, of a monthly series that starts
/// at `first` and ends at `last` after `months` observations.
pub fn compound_annual_growth_rate(first: f64, last: f64, months: usize) -> Result<f64> {
    if months == 0 {
        return Err(MathError::InvalidInput(
            "Months must be positive for growth rate".to_string(),
        ));
    }
    if first <= 0.0 {
        return Err(MathError::InvalidInput(
            "Starting value must be positive for growth rate".to_string(),
        ));
    }

    Ok(((last / first).powf(12.0 / months as f64) - 1.0) * 100.0)
}

/// Monthly growth as a percentage of the current level. Returns 0.0 when the
/// current level is zero, since no meaningful rate exists.
pub fn monthly_growth_pct(slope: f64, current: f64) -> f64 {
    if current == 0.0 {
        return 0.0;
    }
    (slope / current) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_series_has_zero_growth() {
        let rate = compound_annual_growth_rate(1000.0, 1000.0, 24).unwrap();
        assert!(rate.abs() < 1e-9);
    }

    #[test]
    fn test_doubling_in_a_year() {
        let rate = compound_annual_growth_rate(1000.0, 2000.0, 12).unwrap();
        assert!((rate - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compound_annual_growth_rate(1000.0, 2000.0, 0).is_err());
        assert!(compound_annual_growth_rate(0.0, 2000.0, 12).is_err());
    }

    #[test]
    fn test_monthly_growth_pct() {
        assert!((monthly_growth_pct(500.0, 10_000.0) - 5.0).abs() < 1e-12);
        assert_eq!(monthly_growth_pct(500.0, 0.0), 0.0);
    }
}
