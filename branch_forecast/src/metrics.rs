//! Forecast accuracy metrics and descriptive series analysis

use crate::error::{ForecastError, Result};
use branch_data::MonthlyRecord;
use chrono::Datelike;
use statrs::statistics::Statistics;

/// Forecast accuracy metrics against held-out actuals
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: f64,
}

impl std::fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        Ok(())
    }
}

/// Calculate accuracy metrics for a forecast against actual values.
pub fn evaluate_forecast(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::Validation(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).mean();
    let mse = errors.iter().map(|e| e.powi(2)).mean();
    let rmse = mse.sqrt();

    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
    })
}

/// Average transactions for one calendar month across a record set, with
/// its deviation from the all-month baseline
#[derive(Debug, Clone)]
pub struct MonthPattern {
    /// Calendar month, 1-12
    pub month: u32,
    /// Mean transactions over all observations in this month
    pub mean_transactions: f64,
    /// Percent deviation from the mean of the monthly means
    pub vs_baseline_pct: f64,
}

/// Describe the seasonal shape of a record set: the mean transaction
/// volume per calendar month and how far each month sits from baseline.
/// Months with no observations are omitted.
pub fn seasonal_pattern(records: &[MonthlyRecord]) -> Vec<MonthPattern> {
    let mut by_month: Vec<Vec<f64>> = vec![Vec::new(); 12];
    for record in records {
        by_month[record.date.month0() as usize].push(record.transactions);
    }

    let monthly_means: Vec<(u32, f64)> = by_month
        .iter()
        .enumerate()
        .filter(|(_, values)| !values.is_empty())
        .map(|(idx, values)| (idx as u32 + 1, values.iter().mean()))
        .collect();

    if monthly_means.is_empty() {
        return Vec::new();
    }

    let baseline = monthly_means.iter().map(|(_, m)| *m).mean();

    monthly_means
        .into_iter()
        .map(|(month, mean_transactions)| {
            let vs_baseline_pct = if baseline == 0.0 {
                0.0
            } else {
                (mean_transactions / baseline - 1.0) * 100.0
            };
            MonthPattern {
                month,
                mean_transactions,
                vs_baseline_pct,
            }
        })
        .collect()
}
