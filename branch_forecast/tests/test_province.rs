use approx::assert_relative_eq;
use branch_data::utils::generate_monthly_series;
use branch_data::{Branch, MonthlyRecord, Region};
use branch_forecast::province;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn region(region_id: &str, province: &str, population: u64, demand: f64) -> Region {
    Region {
        region_id: region_id.to_string(),
        region_name: format!("{} Name", region_id),
        province: province.to_string(),
        population,
        demand_score: 2.0,
        avg_monthly_transactions: demand,
    }
}

fn branch(branch_id: &str, region_id: &str, capacity: f64) -> Branch {
    Branch {
        branch_id: branch_id.to_string(),
        region_id: region_id.to_string(),
        monthly_transactions: capacity,
    }
}

#[test]
fn test_rollup_aggregates_by_province() {
    let regions = vec![
        region("RG001", "Ontario", 100_000, 50_000.0),
        region("RG002", "Ontario", 200_000, 70_000.0),
        region("RG003", "Quebec", 150_000, 40_000.0),
    ];
    let branches = vec![
        branch("BR001", "RG001", 30_000.0),
        branch("BR002", "RG002", 20_000.0),
        branch("BR003", "RG003", 50_000.0),
    ];
    let histories = HashMap::new();

    let summaries = province::summarize(&regions, &branches, &histories, 6);
    assert_eq!(summaries.len(), 2);

    let ontario = summaries.iter().find(|s| s.province == "Ontario").unwrap();
    assert_eq!(ontario.region_count, 2);
    assert_eq!(ontario.total_population, 300_000);
    assert_relative_eq!(ontario.total_demand, 120_000.0);
    assert_relative_eq!(ontario.total_capacity, 50_000.0);
    assert_relative_eq!(ontario.capacity_gap, 70_000.0);
    assert_relative_eq!(ontario.coverage_ratio, 50_000.0 / 120_000.0 * 100.0);

    let quebec = summaries.iter().find(|s| s.province == "Quebec").unwrap();
    assert_relative_eq!(quebec.capacity_gap, -10_000.0);
    assert!(quebec.coverage_ratio > 100.0);
}

#[test]
fn test_rollup_sums_series_and_projects_trend() {
    let regions = vec![
        region("RG001", "Ontario", 100_000, 50_000.0),
        region("RG002", "Ontario", 100_000, 50_000.0),
    ];
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();

    // Two regions each growing 500/month: the summed series grows 1000/month
    let mut histories: HashMap<String, Vec<MonthlyRecord>> = HashMap::new();
    histories.insert(
        "RG001".to_string(),
        generate_monthly_series("RG001", start, 24, 10_000.0, 500.0, 0.0),
    );
    histories.insert(
        "RG002".to_string(),
        generate_monthly_series("RG002", start, 24, 20_000.0, 500.0, 0.0),
    );

    let summaries = province::summarize(&regions, &[], &histories, 6);
    let ontario = &summaries[0];

    assert_relative_eq!(ontario.monthly_growth, 1_000.0, epsilon = 1e-6);

    // Last summed observation is 30000 + 1000*23; projection adds 6 more
    let current = 30_000.0 + 1_000.0 * 23.0;
    assert_relative_eq!(
        ontario.projected_demand,
        current + 6_000.0,
        epsilon = 1e-6
    );
    assert!(ontario.growth_rate_pct > 0.0);
    assert!(ontario.annual_growth_pct > 0.0);
}

#[test]
fn test_short_series_gets_zero_growth() {
    let regions = vec![region("RG001", "Ontario", 100_000, 50_000.0)];
    let mut histories: HashMap<String, Vec<MonthlyRecord>> = HashMap::new();
    histories.insert(
        "RG001".to_string(),
        vec![MonthlyRecord {
            region_id: "RG001".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            transactions: 9_000.0,
        }],
    );

    let summaries = province::summarize(&regions, &[], &histories, 6);
    let ontario = &summaries[0];

    assert_relative_eq!(ontario.monthly_growth, 0.0);
    assert_relative_eq!(ontario.projected_demand, 9_000.0);
}

#[test]
fn test_sorted_by_projected_demand() {
    let regions = vec![
        region("RG001", "Ontario", 100_000, 10_000.0),
        region("RG002", "Quebec", 100_000, 10_000.0),
    ];
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();

    let mut histories: HashMap<String, Vec<MonthlyRecord>> = HashMap::new();
    histories.insert(
        "RG001".to_string(),
        generate_monthly_series("RG001", start, 12, 5_000.0, 0.0, 0.0),
    );
    histories.insert(
        "RG002".to_string(),
        generate_monthly_series("RG002", start, 12, 50_000.0, 0.0, 0.0),
    );

    let summaries = province::summarize(&regions, &[], &histories, 6);
    assert_eq!(summaries[0].province, "Quebec");
    assert_eq!(summaries[1].province, "Ontario");
}
