//! Tunable policy constants for classification and planning
//!
//! The coverage thresholds and planning divisors have no principled
//! derivation; they are deployment-tuned values, so they live here as named
//! overridable configuration instead of literals in the components.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Policy constants shared by the classifier, forecaster, and planner.
///
/// `Default` carries the reference deployment values; override individual
/// fields and call [`PlanningPolicy::validate`] before handing the policy
/// to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningPolicy {
    /// Demand/capacity ratio above which a region is Underserved (strict >)
    pub underserved_ratio: f64,
    /// Demand/capacity ratio below which a region is Oversupplied (strict <)
    pub oversupplied_ratio: f64,
    /// Floor substituted for the capacity denominator in ratio calculations
    pub capacity_floor: f64,
    /// Minimum history length (months) required to fit a forecast
    pub min_history: usize,
    /// Default number of months to project ahead
    pub forecast_horizon: usize,
    /// Monthly transactions one new branch is expected to absorb
    pub txns_per_branch: f64,
    /// Monthly transactions one staff member is expected to absorb
    pub txns_per_staff: f64,
    /// Demand score above which a recommendation is High priority (strict >)
    pub high_priority_score: f64,
    /// Demand score above which a recommendation is Medium priority (strict >)
    pub medium_priority_score: f64,
    /// Fitted slope (transactions/month) above which a region is flagged
    /// as high growth
    pub high_growth_slope: f64,
    /// When set, forecast only the top K selected regions by demand score
    pub top_k: Option<usize>,
}

impl Default for PlanningPolicy {
    fn default() -> Self {
        Self {
            underserved_ratio: 2.0,
            oversupplied_ratio: 0.5,
            capacity_floor: 1.0,
            min_history: 12,
            forecast_horizon: 6,
            txns_per_branch: 10_000.0,
            txns_per_staff: 600.0,
            high_priority_score: 2.5,
            medium_priority_score: 2.0,
            high_growth_slope: 1_000.0,
            top_k: None,
        }
    }
}

impl PlanningPolicy {
    /// Check that the policy values are internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.underserved_ratio <= self.oversupplied_ratio {
            return Err(ForecastError::Validation(
                "Underserved ratio must exceed oversupplied ratio".to_string(),
            ));
        }
        if self.capacity_floor <= 0.0 {
            return Err(ForecastError::Validation(
                "Capacity floor must be positive".to_string(),
            ));
        }
        if self.min_history < 2 {
            return Err(ForecastError::Validation(
                "Minimum history must be at least 2 months".to_string(),
            ));
        }
        if self.forecast_horizon == 0 {
            return Err(ForecastError::Validation(
                "Forecast horizon must be positive".to_string(),
            ));
        }
        if self.txns_per_branch <= 0.0 || self.txns_per_staff <= 0.0 {
            return Err(ForecastError::Validation(
                "Capacity divisors must be positive".to_string(),
            ));
        }
        if self.high_priority_score <= self.medium_priority_score {
            return Err(ForecastError::Validation(
                "High priority cutoff must exceed medium priority cutoff".to_string(),
            ));
        }
        if self.top_k == Some(0) {
            return Err(ForecastError::Validation(
                "Top-K selection must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
