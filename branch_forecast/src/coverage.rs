//! Coverage classification of regions against their branch capacity

use crate::policy::PlanningPolicy;
use branch_data::{Branch, CoverageStatus, Region};
use plan_math::ratio::safe_ratio;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived per-region view of branch capacity versus demand. Recomputed
/// fresh on every run from the Region and Branch inputs; never persisted as
/// authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalSummary {
    /// Region key
    pub region_id: String,
    /// Region name, carried through for reporting
    pub region_name: String,
    /// Province, carried through for reporting
    pub province: String,
    /// Composite priority metric from the Region record
    pub demand_score: f64,
    /// Current monthly transaction demand
    pub avg_monthly_transactions: f64,
    /// Number of branches serving the region
    pub branch_count: usize,
    /// Sum of member branches' monthly transaction capacity
    pub total_branch_capacity: f64,
    /// Demand minus capacity; positive means unmet demand
    pub capacity_gap: f64,
    /// Classification of capacity against demand
    pub coverage_status: CoverageStatus,
}

/// Classifies regions by comparing branch capacity to transaction demand
#[derive(Debug, Clone, Default)]
pub struct CoverageClassifier {
    policy: PlanningPolicy,
}

impl CoverageClassifier {
    /// Create a classifier with the given policy thresholds.
    pub fn new(policy: PlanningPolicy) -> Self {
        Self { policy }
    }

    /// Classify one region against the branches that serve it. Pure: the
    /// same inputs always produce the same summary.
    ///
    /// Branches whose `region_id` does not match the region are ignored, so
    /// callers may pass an unfiltered slice.
    pub fn classify(&self, region: &Region, branches: &[Branch]) -> RegionalSummary {
        let members: Vec<&Branch> = branches
            .iter()
            .filter(|b| b.region_id == region.region_id)
            .collect();

        let branch_count = members.len();
        let total_branch_capacity: f64 = members.iter().map(|b| b.monthly_transactions).sum();
        let capacity_gap = region.avg_monthly_transactions - total_branch_capacity;

        let coverage_status = if branch_count == 0 {
            CoverageStatus::NoCoverage
        } else {
            let ratio = safe_ratio(
                region.avg_monthly_transactions,
                total_branch_capacity,
                self.policy.capacity_floor,
            );
            if ratio > self.policy.underserved_ratio {
                CoverageStatus::Underserved
            } else if ratio < self.policy.oversupplied_ratio {
                CoverageStatus::Oversupplied
            } else {
                CoverageStatus::Balanced
            }
        };

        RegionalSummary {
            region_id: region.region_id.clone(),
            region_name: region.region_name.clone(),
            province: region.province.clone(),
            demand_score: region.demand_score,
            avg_monthly_transactions: region.avg_monthly_transactions,
            branch_count,
            total_branch_capacity,
            capacity_gap,
            coverage_status,
        }
    }

    /// Classify every region, grouping branches by `region_id` once up
    /// front. Summaries come back in the order of the `regions` slice.
    pub fn classify_all(&self, regions: &[Region], branches: &[Branch]) -> Vec<RegionalSummary> {
        let mut by_region: HashMap<&str, Vec<Branch>> = HashMap::new();
        for branch in branches {
            by_region
                .entry(branch.region_id.as_str())
                .or_default()
                .push(branch.clone());
        }

        regions
            .iter()
            .map(|region| {
                let members = by_region
                    .get(region.region_id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                self.classify(region, members)
            })
            .collect()
    }
}
