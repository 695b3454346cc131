//! Translation of forecast capacity gaps into expansion recommendations

use crate::coverage::RegionalSummary;
use crate::error::{ForecastError, Result};
use crate::forecast::RegionForecast;
use crate::policy::PlanningPolicy;
use branch_data::PriorityLevel;
use serde::{Deserialize, Serialize};

/// Staffing and branch-count recommendation for one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityRecommendation {
    /// Region key
    pub region_id: String,
    /// Region name, carried through for reporting
    pub region_name: String,
    /// Province, carried through for reporting
    pub province: String,
    /// Composite priority metric from the Region record
    pub demand_score: f64,
    /// Forecast demand at the full horizon minus current branch capacity
    pub projected_gap: f64,
    /// New branches recommended; never negative, branches are not removed
    pub branches_needed: u32,
    /// Additional staff recommended; never negative
    pub staff_needed: u32,
    /// Priority tier derived from the demand score
    pub priority_level: PriorityLevel,
    /// Position after sorting by priority then demand score; 1 = highest.
    /// Assigned by the pipeline, 0 until then.
    pub priority_rank: u32,
    /// Whether the fitted slope exceeds the high-growth threshold
    pub high_growth: bool,
    /// Narrative action for the planning report
    pub recommendation: String,
}

/// Converts a coverage summary plus a forecast into a recommendation
#[derive(Debug, Clone, Default)]
pub struct CapacityPlanner {
    policy: PlanningPolicy,
}

impl CapacityPlanner {
    /// Create a planner with the given policy divisors and cutoffs.
    pub fn new(policy: PlanningPolicy) -> Self {
        Self { policy }
    }

    /// Derive the recommendation for one region from its current summary
    /// and the forecast at the full horizon.
    pub fn plan(
        &self,
        summary: &RegionalSummary,
        forecast: &RegionForecast,
    ) -> Result<CapacityRecommendation> {
        let final_point = forecast.final_point().ok_or_else(|| {
            ForecastError::EmptyInput(format!(
                "Forecast for {} has no projected points",
                forecast.region_id
            ))
        })?;

        let projected_gap = final_point.forecast_value - summary.total_branch_capacity;

        // A shrinking gap never produces negative recommendations.
        let branches_needed = (projected_gap / self.policy.txns_per_branch).round().max(0.0) as u32;
        let staff_needed = (projected_gap / self.policy.txns_per_staff).round().max(0.0) as u32;

        let priority_level = if summary.demand_score > self.policy.high_priority_score {
            PriorityLevel::High
        } else if summary.demand_score > self.policy.medium_priority_score {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        };

        let recommendation = if branches_needed > 3 {
            "Open 3-4 new branches immediately".to_string()
        } else if branches_needed > 1 {
            format!("Open {} new branches", branches_needed)
        } else if staff_needed > 0 {
            format!("Increase staffing by {} in existing branches", staff_needed)
        } else {
            "No additional capacity required".to_string()
        };

        Ok(CapacityRecommendation {
            region_id: summary.region_id.clone(),
            region_name: summary.region_name.clone(),
            province: summary.province.clone(),
            demand_score: summary.demand_score,
            projected_gap,
            branches_needed,
            staff_needed,
            priority_level,
            priority_rank: 0,
            high_growth: forecast.slope > self.policy.high_growth_slope,
            recommendation,
        })
    }
}
