//! Run the full coverage pipeline over a synthetic branch network.
//!
//! Run with: cargo run --example expansion_plan

use branch_data::utils::{generate_monthly_series, generate_test_network};
use branch_forecast::pipeline::CoverageForecastPipeline;
use branch_forecast::policy::PlanningPolicy;
use branch_forecast::province;
use chrono::NaiveDate;
use std::collections::HashMap;

fn main() -> branch_forecast::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("branch_forecast=info")
        .init();

    let (regions, branches) = generate_test_network(12, 4);

    // Two years of history per region, trending toward its current demand
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid date");
    let mut histories: HashMap<String, Vec<_>> = HashMap::new();
    for region in &regions {
        let base = region.avg_monthly_transactions * 0.8;
        let growth = region.avg_monthly_transactions * 0.01;
        histories.insert(
            region.region_id.clone(),
            generate_monthly_series(&region.region_id, start, 24, base, growth, 0.05),
        );
    }

    let policy = PlanningPolicy {
        top_k: Some(5),
        ..PlanningPolicy::default()
    };
    let pipeline = CoverageForecastPipeline::new(policy)?;
    let report = pipeline.run(&regions, &branches, &histories);

    println!("Coverage by region:");
    for summary in &report.summaries {
        println!(
            "  {:<8} {:<12} {:>3} branches  gap {:>10.0}  {}",
            summary.region_id,
            summary.province,
            summary.branch_count,
            summary.capacity_gap,
            summary.coverage_status
        );
    }

    println!();
    println!("Expansion recommendations:");
    for rec in &report.recommendations {
        println!(
            "  #{} {} ({}): {} — projected gap {:.0}{}",
            rec.priority_rank,
            rec.region_name,
            rec.priority_level,
            rec.recommendation,
            rec.projected_gap,
            if rec.high_growth { " [high growth]" } else { "" }
        );
    }

    for skipped in &report.skipped {
        println!("  {} skipped: {}", skipped.region_id, skipped.reason);
    }

    println!();
    println!("Province outlook:");
    for summary in province::summarize(&regions, &branches, &histories, 6) {
        println!(
            "  {:<18} current gap {:>11.0}  projected demand {:>11.0}  growth {:+.2}%/mo",
            summary.province, summary.capacity_gap, summary.projected_demand, summary.growth_rate_pct
        );
    }

    Ok(())
}
