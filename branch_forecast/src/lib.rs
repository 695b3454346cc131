//! # Branch Forecast
//!
//! A Rust library for branch-network coverage analysis and demand
//! forecasting. It turns a snapshot of regions, branches, and monthly
//! transaction series into operational decisions: which regions are under-
//! or over-served, how their demand will evolve over the coming months, and
//! how much staffing and branch capacity should be added.
//!
//! ## Features
//!
//! - Coverage classification of regions against branch capacity
//! - Linear-trend + monthly-seasonal forecasting of transaction series
//! - Capacity-gap translation into staffing/branch recommendations
//! - Province-level rollups and forecast accuracy metrics
//!
//! ## Quick Start
//!
//! ```no_run
//! use branch_data::loader::DataLoader;
//! use branch_forecast::pipeline::CoverageForecastPipeline;
//! use branch_forecast::policy::PlanningPolicy;
//! use std::collections::HashMap;
//!
//! # fn main() -> branch_forecast::Result<()> {
//! let regions = DataLoader::load_regions("regions.csv").unwrap();
//! let branches = DataLoader::load_branches("branches.csv").unwrap();
//! let records = DataLoader::load_monthly_records("transactions.csv").unwrap();
//!
//! let mut histories: HashMap<String, Vec<_>> = HashMap::new();
//! for record in records {
//!     histories.entry(record.region_id.clone()).or_default().push(record);
//! }
//!
//! let pipeline = CoverageForecastPipeline::new(PlanningPolicy::default())?;
//! let report = pipeline.run(&regions, &branches, &histories);
//!
//! for recommendation in &report.recommendations {
//!     println!(
//!         "#{} {} ({}): {}",
//!         recommendation.priority_rank,
//!         recommendation.region_name,
//!         recommendation.priority_level,
//!         recommendation.recommendation
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The engine is pure and synchronous: it performs no I/O and keeps no
//! state between runs. Loading records and rendering reports belong to the
//! collaborators on either side of it.

pub mod coverage;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod pipeline;
pub mod planner;
pub mod policy;
pub mod province;

// Re-export commonly used types
pub use crate::coverage::{CoverageClassifier, RegionalSummary};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{
    FittedTrendSeasonal, ForecastPoint, RegionForecast, TrendSeasonalForecaster,
};
pub use crate::pipeline::{CoverageForecastPipeline, CoverageReport, SkippedRegion};
pub use crate::planner::{CapacityPlanner, CapacityRecommendation};
pub use crate::policy::PlanningPolicy;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
