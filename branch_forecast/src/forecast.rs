//! Linear-trend-plus-seasonal forecasting of monthly transaction series

use crate::error::{ForecastError, Result};
use crate::policy::PlanningPolicy;
use branch_data::MonthlyRecord;
use chrono::{Datelike, Months, NaiveDate};
use plan_math::regression::TrendLine;
use plan_math::seasonal::SeasonalProfile;
use serde::{Deserialize, Serialize};

/// One projected future month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// First day of the projected month
    pub date: NaiveDate,
    /// Linear trend projection. May run negative when the fitted slope is
    /// strongly negative; no floor is applied.
    pub trend_value: f64,
    /// Trend value scaled by the month's seasonal multiplier
    pub forecast_value: f64,
}

/// A region's forecast: the fitted trend parameters and the projected
/// points, one per future calendar month without gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionForecast {
    /// Region the forecast belongs to
    pub region_id: String,
    /// Fitted trend slope, in transactions per month
    pub slope: f64,
    /// Fitted trend intercept
    pub intercept: f64,
    /// Projected points, oldest first
    pub points: Vec<ForecastPoint>,
}

impl RegionForecast {
    /// The projection at the full horizon, if any points were requested.
    pub fn final_point(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }
}

/// Forecaster configuration: how much history a fit requires
#[derive(Debug, Clone)]
pub struct TrendSeasonalForecaster {
    min_history: usize,
}

impl Default for TrendSeasonalForecaster {
    fn default() -> Self {
        Self {
            min_history: PlanningPolicy::default().min_history,
        }
    }
}

impl TrendSeasonalForecaster {
    /// Create a forecaster requiring at least `min_history` months of data.
    pub fn new(min_history: usize) -> Result<Self> {
        if min_history < 2 {
            return Err(ForecastError::Validation(
                "Minimum history must be at least 2 months".to_string(),
            ));
        }
        Ok(Self { min_history })
    }

    /// Create a forecaster from the shared planning policy.
    pub fn from_policy(policy: &PlanningPolicy) -> Self {
        Self {
            min_history: policy.min_history,
        }
    }

    /// Fit a trend line and seasonal profile to one region's chronological
    /// monthly history.
    ///
    /// Fails with [`ForecastError::InsufficientHistory`] before any
    /// computation when the series is shorter than the minimum window; the
    /// caller skips or flags the region rather than forecasting from
    /// unreliable data. The series is assumed chronological with no
    /// duplicate months, as guaranteed by the ingestion boundary.
    pub fn fit(&self, history: &[MonthlyRecord]) -> Result<FittedTrendSeasonal> {
        if history.len() < self.min_history {
            return Err(ForecastError::InsufficientHistory(format!(
                "Need at least {} months of history, got {}",
                self.min_history,
                history.len()
            )));
        }

        let values: Vec<f64> = history.iter().map(|r| r.transactions).collect();
        let trend = TrendLine::fit(&values)?;

        // Detrend each observation; a zero trend value contributes a
        // neutral ratio instead of dividing by zero.
        let observations = history.iter().enumerate().map(|(t, record)| {
            let trend_value = trend.value_at(t as f64);
            let ratio = if trend_value == 0.0 {
                1.0
            } else {
                record.transactions / trend_value
            };
            (record.date.month(), ratio)
        });
        let seasonal = SeasonalProfile::from_observations(observations)?;

        let last = history.last().expect("history is non-empty");

        Ok(FittedTrendSeasonal {
            region_id: last.region_id.clone(),
            trend,
            seasonal,
            last_date: last.date,
            history_len: history.len(),
        })
    }
}

/// A fitted model ready to project future months
#[derive(Debug, Clone)]
pub struct FittedTrendSeasonal {
    region_id: String,
    trend: TrendLine,
    seasonal: SeasonalProfile,
    last_date: NaiveDate,
    history_len: usize,
}

impl FittedTrendSeasonal {
    /// Fitted trend slope, in transactions per month.
    pub fn slope(&self) -> f64 {
        self.trend.slope
    }

    /// Fitted trend intercept.
    pub fn intercept(&self) -> f64 {
        self.trend.intercept
    }

    /// Seasonal multiplier for a calendar month (1-12).
    pub fn seasonal_multiplier(&self, month: u32) -> Result<f64> {
        Ok(self.seasonal.multiplier(month)?)
    }

    /// In-sample trend values for the fitted history, oldest first.
    pub fn trend_values(&self) -> Vec<f64> {
        self.trend.fitted_values(self.history_len)
    }

    /// Project `months_ahead` future points, one per calendar month
    /// continuing from the last historical date. All intermediate math
    /// stays in floating point; rounding to whole transactions belongs to
    /// the presentation boundary.
    pub fn forecast(&self, months_ahead: usize) -> Result<RegionForecast> {
        if months_ahead == 0 {
            return Err(ForecastError::Validation(
                "Months ahead must be positive".to_string(),
            ));
        }

        let mut points = Vec::with_capacity(months_ahead);
        let mut date = self.last_date;

        for i in 1..=months_ahead {
            let future_t = (self.history_len - 1 + i) as f64;
            date = date + Months::new(1);

            let trend_value = self.trend.value_at(future_t);
            let multiplier = self.seasonal.multiplier(date.month())?;

            points.push(ForecastPoint {
                date,
                trend_value,
                forecast_value: trend_value * multiplier,
            });
        }

        Ok(RegionForecast {
            region_id: self.region_id.clone(),
            slope: self.trend.slope,
            intercept: self.trend.intercept,
            points,
        })
    }
}
