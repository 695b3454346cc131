//! Province-level rollups of demand, capacity, and growth

use branch_data::{Branch, MonthlyRecord, Region};
use chrono::NaiveDate;
use plan_math::growth::{compound_annual_growth_rate, monthly_growth_pct};
use plan_math::ratio::safe_ratio;
use plan_math::regression::TrendLine;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Aggregated view of one province's branch network and demand trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceSummary {
    /// Province name
    pub province: String,
    /// Number of regions in the province
    pub region_count: usize,
    /// Sum of region populations
    pub total_population: u64,
    /// Sum of regional monthly transaction demand
    pub total_demand: f64,
    /// Sum of branch capacity across the province
    pub total_capacity: f64,
    /// Demand minus capacity
    pub capacity_gap: f64,
    /// Capacity as a percentage of demand
    pub coverage_ratio: f64,
    /// Fitted slope of the province's summed monthly series, in
    /// transactions per month; 0 when the series is too short to fit
    pub monthly_growth: f64,
    /// Trend-only projection `horizon` months out: last observed total
    /// plus slope times horizon, with no seasonal adjustment
    pub projected_demand: f64,
    /// Monthly growth as a percentage of the current level
    pub growth_rate_pct: f64,
    /// Compound annual growth rate of the summed series, in percent
    pub annual_growth_pct: f64,
}

/// Roll regions, branches, and histories up to province level. Provinces
/// come back sorted by projected demand, largest first.
///
/// A province whose summed series is too short to fit a trend gets a
/// zero-growth projection; the rollup is descriptive and never fails for
/// thin history.
pub fn summarize(
    regions: &[Region],
    branches: &[Branch],
    histories: &HashMap<String, Vec<MonthlyRecord>>,
    horizon: usize,
) -> Vec<ProvinceSummary> {
    let province_of: HashMap<&str, &str> = regions
        .iter()
        .map(|r| (r.region_id.as_str(), r.province.as_str()))
        .collect();

    let mut capacity_by_province: HashMap<&str, f64> = HashMap::new();
    for branch in branches {
        if let Some(&province) = province_of.get(branch.region_id.as_str()) {
            *capacity_by_province.entry(province).or_default() += branch.monthly_transactions;
        }
    }

    // Sum each province's regional series month by month
    let mut series_by_province: HashMap<&str, BTreeMap<NaiveDate, f64>> = HashMap::new();
    for (region_id, history) in histories {
        if let Some(&province) = province_of.get(region_id.as_str()) {
            let series = series_by_province.entry(province).or_default();
            for record in history {
                *series.entry(record.date).or_default() += record.transactions;
            }
        }
    }

    let mut provinces: BTreeMap<&str, Vec<&Region>> = BTreeMap::new();
    for region in regions {
        provinces
            .entry(region.province.as_str())
            .or_default()
            .push(region);
    }

    let mut summaries: Vec<ProvinceSummary> = provinces
        .into_iter()
        .map(|(province, members)| {
            let total_population: u64 = members.iter().map(|r| r.population).sum();
            let total_demand: f64 = members.iter().map(|r| r.avg_monthly_transactions).sum();
            let total_capacity = capacity_by_province.get(province).copied().unwrap_or(0.0);

            let values: Vec<f64> = series_by_province
                .get(province)
                .map(|series| series.values().copied().collect())
                .unwrap_or_default();
            let current = values.last().copied().unwrap_or(0.0);

            let (monthly_growth, annual_growth_pct) = match TrendLine::fit(&values) {
                Ok(trend) => {
                    let annual =
                        compound_annual_growth_rate(values[0], current, values.len())
                            .unwrap_or(0.0);
                    (trend.slope, annual)
                }
                Err(_) => (0.0, 0.0),
            };

            ProvinceSummary {
                province: province.to_string(),
                region_count: members.len(),
                total_population,
                total_demand,
                total_capacity,
                capacity_gap: total_demand - total_capacity,
                coverage_ratio: safe_ratio(total_capacity, total_demand, 1.0) * 100.0,
                monthly_growth,
                projected_demand: current + monthly_growth * horizon as f64,
                growth_rate_pct: monthly_growth_pct(monthly_growth, current),
                annual_growth_pct,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.projected_demand
            .partial_cmp(&a.projected_demand)
            .unwrap_or(Ordering::Equal)
    });

    summaries
}
