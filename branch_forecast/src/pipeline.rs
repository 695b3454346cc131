//! End-to-end orchestration: classify, forecast, recommend

use crate::coverage::{CoverageClassifier, RegionalSummary};
use crate::error::Result;
use crate::forecast::{RegionForecast, TrendSeasonalForecaster};
use crate::planner::{CapacityPlanner, CapacityRecommendation};
use crate::policy::PlanningPolicy;
use branch_data::{Branch, MonthlyRecord, Region};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{info, warn};

/// A region that was selected for forecasting but could not be forecast.
/// Reported explicitly so consumers can tell "balanced, no forecast needed"
/// apart from "underserved, forecast unavailable".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRegion {
    /// Region key
    pub region_id: String,
    /// Why no forecast was produced
    pub reason: String,
}

/// Full output of one pipeline run, handed to the export/render layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// One summary per input region, in input order
    pub summaries: Vec<RegionalSummary>,
    /// Recommendations sorted by priority then demand score descending,
    /// with `priority_rank` assigned from 1
    pub recommendations: Vec<CapacityRecommendation>,
    /// Forecast series for chart rendering, matching the recommendations
    pub forecasts: Vec<RegionForecast>,
    /// Selected regions with no forecast, and why
    pub skipped: Vec<SkippedRegion>,
}

impl CoverageReport {
    /// Serialize the report for the export boundary.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Orchestrates classification, forecasting, and planning over a snapshot
/// of the branch network. Stateless between runs: every invocation
/// recomputes from the inputs it is handed.
#[derive(Debug, Clone)]
pub struct CoverageForecastPipeline {
    policy: PlanningPolicy,
    classifier: CoverageClassifier,
    forecaster: TrendSeasonalForecaster,
    planner: CapacityPlanner,
}

impl Default for CoverageForecastPipeline {
    fn default() -> Self {
        let policy = PlanningPolicy::default();
        Self {
            classifier: CoverageClassifier::new(policy.clone()),
            forecaster: TrendSeasonalForecaster::from_policy(&policy),
            planner: CapacityPlanner::new(policy.clone()),
            policy,
        }
    }
}

impl CoverageForecastPipeline {
    /// Build a pipeline after validating the policy once up front.
    pub fn new(policy: PlanningPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            classifier: CoverageClassifier::new(policy.clone()),
            forecaster: TrendSeasonalForecaster::from_policy(&policy),
            planner: CapacityPlanner::new(policy.clone()),
            policy,
        })
    }

    /// Run the full pipeline over the current snapshot. `histories` maps
    /// `region_id` to that region's chronological monthly series.
    ///
    /// Regions that cannot be forecast are recorded in the report's
    /// `skipped` set; they never fail the run.
    pub fn run(
        &self,
        regions: &[Region],
        branches: &[Branch],
        histories: &HashMap<String, Vec<MonthlyRecord>>,
    ) -> CoverageReport {
        let summaries = self.classifier.classify_all(regions, branches);

        // Regions with unmet demand, most urgent demand first
        let mut selected: Vec<&RegionalSummary> = summaries
            .iter()
            .filter(|s| s.coverage_status.needs_expansion())
            .collect();
        selected.sort_by(|a, b| {
            b.demand_score
                .partial_cmp(&a.demand_score)
                .unwrap_or(Ordering::Equal)
        });
        if let Some(k) = self.policy.top_k {
            selected.truncate(k);
        }

        let mut forecasts: Vec<RegionForecast> = Vec::new();
        let mut recommendations: Vec<CapacityRecommendation> = Vec::new();
        let mut skipped: Vec<SkippedRegion> = Vec::new();

        for summary in selected {
            let history = histories
                .get(&summary.region_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let forecast = self
                .forecaster
                .fit(history)
                .and_then(|fitted| fitted.forecast(self.policy.forecast_horizon));

            match forecast {
                Ok(forecast) => match self.planner.plan(summary, &forecast) {
                    Ok(recommendation) => {
                        forecasts.push(forecast);
                        recommendations.push(recommendation);
                    }
                    Err(err) => {
                        warn!(region_id = %summary.region_id, error = %err, "planning failed");
                        skipped.push(SkippedRegion {
                            region_id: summary.region_id.clone(),
                            reason: err.to_string(),
                        });
                    }
                },
                Err(err) => {
                    warn!(region_id = %summary.region_id, error = %err, "forecast unavailable");
                    skipped.push(SkippedRegion {
                        region_id: summary.region_id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        rank_recommendations(&mut recommendations);

        info!(
            regions = summaries.len(),
            recommendations = recommendations.len(),
            skipped = skipped.len(),
            "coverage pipeline run complete"
        );

        CoverageReport {
            summaries,
            recommendations,
            forecasts,
            skipped,
        }
    }

    /// The policy this pipeline was built with.
    pub fn policy(&self) -> &PlanningPolicy {
        &self.policy
    }
}

/// Sort recommendations by priority level, then demand score descending,
/// and assign `priority_rank` starting at 1.
fn rank_recommendations(recommendations: &mut [CapacityRecommendation]) {
    recommendations.sort_by(|a, b| {
        a.priority_level
            .cmp(&b.priority_level)
            .then_with(|| {
                b.demand_score
                    .partial_cmp(&a.demand_score)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.region_id.cmp(&b.region_id))
    });

    for (i, recommendation) in recommendations.iter_mut().enumerate() {
        recommendation.priority_rank = (i + 1) as u32;
    }
}
