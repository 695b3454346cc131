//! Test-data generation and parameter validation helpers
//!
//! The generators exist for tests and examples; production data always
//! arrives through the ingestion boundary.

use crate::{Branch, DataError, MonthlyRecord, Region, Result};
use chrono::{Datelike, Months, NaiveDate};
use std::f64::consts::TAU;

/// Validate that a floating-point parameter is positive.
pub fn validate_positive(value: f64, name: &str) -> Result<()> {
    if value <= 0.0 {
        return Err(DataError::InvalidRecord(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(())
}

/// Validate that a value falls within a closed range.
pub fn validate_range(value: f64, min: f64, max: f64, name: &str) -> Result<()> {
    if value < min || value > max {
        return Err(DataError::InvalidRecord(format!(
            "{} must be between {} and {}",
            name, min, max
        )));
    }
    Ok(())
}

/// Generate a deterministic monthly series with a linear trend and an
/// optional sinusoidal seasonal component.
///
/// `seasonal_amplitude` of 0.0 yields a perfectly linear series; 0.1 swings
/// each month up to ±10% around the trend, peaking mid-year.
pub fn generate_monthly_series(
    region_id: &str,
    start: NaiveDate,
    months: usize,
    base: f64,
    monthly_growth: f64,
    seasonal_amplitude: f64,
) -> Vec<MonthlyRecord> {
    let mut series = Vec::with_capacity(months);
    let mut date = start;

    for t in 0..months {
        let trend = base + monthly_growth * t as f64;
        let phase = (date.month0() as f64) / 12.0;
        let seasonal = 1.0 + seasonal_amplitude * (TAU * phase).sin();

        series.push(MonthlyRecord {
            region_id: region_id.to_string(),
            date,
            transactions: trend * seasonal,
        });

        date = date + Months::new(1);
    }

    series
}

/// Generate a monthly series with random noise around a linear trend, for
/// tests that need non-degenerate residuals.
pub fn generate_noisy_series(
    region_id: &str,
    start: NaiveDate,
    months: usize,
    base: f64,
    monthly_growth: f64,
    volatility: f64,
) -> Vec<MonthlyRecord> {
    use rand::{thread_rng, Rng};

    let mut rng = thread_rng();
    let mut series = Vec::with_capacity(months);
    let mut date = start;

    for t in 0..months {
        let trend = base + monthly_growth * t as f64;
        let noise = 1.0 + volatility * (rng.gen::<f64>() - 0.5);

        series.push(MonthlyRecord {
            region_id: region_id.to_string(),
            date,
            transactions: (trend * noise).max(0.0),
        });

        date = date + Months::new(1);
    }

    series
}

/// Generate a small synthetic branch network for examples: regions with
/// randomized demand and zero to `max_branches_per_region` branches each.
pub fn generate_test_network(
    num_regions: usize,
    max_branches_per_region: usize,
) -> (Vec<Region>, Vec<Branch>) {
    use rand::{thread_rng, Rng};

    const PROVINCES: [&str; 4] = ["Ontario", "Quebec", "British Columbia", "Alberta"];

    let mut rng = thread_rng();
    let mut regions = Vec::with_capacity(num_regions);
    let mut branches = Vec::new();

    for i in 0..num_regions {
        let region_id = format!("RG{:03}", i + 1);
        let demand = rng.gen_range(20_000.0..250_000.0);

        regions.push(Region {
            region_id: region_id.clone(),
            region_name: format!("Region {}", i + 1),
            province: PROVINCES[i % PROVINCES.len()].to_string(),
            population: rng.gen_range(50_000..2_000_000),
            demand_score: rng.gen_range(0.5..4.0),
            avg_monthly_transactions: demand,
        });

        let branch_count = rng.gen_range(0..=max_branches_per_region);
        for j in 0..branch_count {
            branches.push(Branch {
                branch_id: format!("BR{:03}-{}", i + 1, j + 1),
                region_id: region_id.clone(),
                monthly_transactions: rng.gen_range(5_000.0..15_000.0),
            });
        }
    }

    (regions, branches)
}
