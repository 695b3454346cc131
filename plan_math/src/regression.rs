//! Ordinary least squares trend fitting over a time-indexed series

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// A fitted linear trend `value = slope * t + intercept`, where `t` is the
/// zero-based position of each observation in the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Change in value per time step
    pub slope: f64,
    /// Fitted value at `t = 0`
    pub intercept: f64,
}

impl TrendLine {
    /// Fit a trend line to a series using the closed-form least squares
    /// solution. Observations are indexed `t = 0..n-1` in the order given.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points to fit a trend line".to_string(),
            ));
        }

        let n = values.len() as f64;
        let t_mean = (0..values.len()).map(|t| t as f64).sum::<f64>() / n;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let t = i as f64;
            numerator += (t - t_mean) * (y - y_mean);
            denominator += (t - t_mean) * (t - t_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: time indices are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * t_mean;

        Ok(Self { slope, intercept })
    }

    /// Fitted value at time index `t`. Extrapolates freely beyond the
    /// observed range; a negative slope can drive late projections below
    /// zero and no floor is applied here.
    pub fn value_at(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }

    /// Fitted values for the observed range `t = 0..n-1`.
    pub fn fitted_values(&self, n: usize) -> Vec<f64> {
        (0..n).map(|t| self.value_at(t as f64)).collect()
    }

    /// Coefficient of determination of this line against the values it was
    /// (or could have been) fitted to.
    pub fn r_squared(&self, values: &[f64]) -> Result<f64> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points to calculate R-squared".to_string(),
            ));
        }

        let y_mean = values.iter().sum::<f64>() / values.len() as f64;

        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let y_pred = self.value_at(i as f64);
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - y_pred).powi(2);
        }

        if ss_total.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate R-squared: total sum of squares is too small".to_string(),
            ));
        }

        Ok(1.0 - (ss_residual / ss_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_linear_fit() {
        let values: Vec<f64> = (0..12).map(|t| 1000.0 + 50.0 * t as f64).collect();
        let trend = TrendLine::fit(&values).unwrap();

        assert!((trend.slope - 50.0).abs() < 1e-9);
        assert!((trend.intercept - 1000.0).abs() < 1e-9);
        assert!((trend.value_at(20.0) - 2000.0).abs() < 1e-9);
        assert!(trend.r_squared(&values).unwrap() > 0.999);
    }

    #[test]
    fn test_negative_slope_extrapolates_below_zero() {
        let values: Vec<f64> = (0..12).map(|t| 100.0 - 20.0 * t as f64).collect();
        let trend = TrendLine::fit(&values).unwrap();

        assert!(trend.slope < 0.0);
        assert!(trend.value_at(24.0) < 0.0);
    }

    #[test]
    fn test_too_few_points() {
        let result = TrendLine::fit(&[42.0]);
        assert!(matches!(result, Err(MathError::InsufficientData(_))));
    }

    #[test]
    fn test_fitted_values_length() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        let trend = TrendLine::fit(&values).unwrap();
        assert_eq!(trend.fitted_values(values.len()).len(), 4);
    }
}
