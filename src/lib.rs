//! # BranchPlan
//!
//! Workspace facade for the branch coverage and forecasting engine. The
//! member crates carry the functionality:
//!
//! - [`branch_data`] — input records, validation boundary, test-data helpers
//! - [`plan_math`] — trend fitting, seasonal profiles, guard policies
//! - [`branch_forecast`] — classification, forecasting, capacity planning
//!
//! ## Example
//!
//! ```
//! use branch_plan_workspace::branch_forecast::CoverageForecastPipeline;
//!
//! let pipeline = CoverageForecastPipeline::default();
//! let report = pipeline.run(&[], &[], &Default::default());
//! assert!(report.summaries.is_empty());
//! ```

pub use branch_data;
pub use branch_forecast;
pub use plan_math;
