//! # Branch Data
//!
//! `branch_data` holds the input records for branch-network coverage
//! planning: regions with their transaction demand, the branches serving
//! them, and per-region monthly transaction series. It also owns the
//! ingestion boundary — records are validated here, so the downstream
//! engine can assume well-formed input — and the shared vocabulary enums
//! used in coverage and planning output.
//!
//! ## Usage Example
//!
//! ```no_run
//! use branch_data::loader::DataLoader;
//!
//! let regions = DataLoader::load_regions("regions.csv").unwrap();
//! let branches = DataLoader::load_branches("branches.csv").unwrap();
//! let histories = DataLoader::load_monthly_records("transactions.csv").unwrap();
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod loader;
pub mod utils;

/// Errors raised at the data-ingestion boundary
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for data-boundary operations
pub type Result<T> = std::result::Result<T, DataError>;

/// A geographic region with its externally supplied demand profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Unique region key
    pub region_id: String,
    /// Human-readable region name
    pub region_name: String,
    /// Province the region belongs to
    pub province: String,
    /// Resident population, always positive
    pub population: u64,
    /// Composite priority metric supplied by the demand model, >= 0
    pub demand_score: f64,
    /// Current monthly transaction demand, >= 0
    pub avg_monthly_transactions: f64,
}

/// A branch location contributing transaction capacity to its region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Unique branch key
    pub branch_id: String,
    /// Region this branch serves; many branches per region, zero allowed
    pub region_id: String,
    /// Monthly transaction capacity, >= 0
    pub monthly_transactions: f64,
}

/// One point of a region's monthly transaction series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Region the observation belongs to
    pub region_id: String,
    /// First day of the observed month
    pub date: NaiveDate,
    /// Transactions observed that month, >= 0
    pub transactions: f64,
}

/// Classification of a region's branch capacity relative to its demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// No branches serve the region
    #[serde(rename = "No Coverage")]
    NoCoverage,
    /// Demand is more than double the available capacity
    Underserved,
    /// Capacity roughly matches demand
    Balanced,
    /// Capacity is more than double the demand
    Oversupplied,
}

impl CoverageStatus {
    /// Severity rank for sorting and export: 1 = No Coverage (worst)
    /// through 4 = Oversupplied.
    pub fn severity_rank(&self) -> u8 {
        match self {
            CoverageStatus::NoCoverage => 1,
            CoverageStatus::Underserved => 2,
            CoverageStatus::Balanced => 3,
            CoverageStatus::Oversupplied => 4,
        }
    }

    /// Whether the region has unmet demand worth forecasting.
    pub fn needs_expansion(&self) -> bool {
        matches!(
            self,
            CoverageStatus::NoCoverage | CoverageStatus::Underserved
        )
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CoverageStatus::NoCoverage => "No Coverage",
            CoverageStatus::Underserved => "Underserved",
            CoverageStatus::Balanced => "Balanced",
            CoverageStatus::Oversupplied => "Oversupplied",
        };
        write!(f, "{}", label)
    }
}

/// Priority tier of a capacity recommendation, ordered from most to least
/// urgent so sorting ascending puts high-priority regions first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriorityLevel::High => "High Priority",
            PriorityLevel::Medium => "Medium Priority",
            PriorityLevel::Low => "Low Priority",
        };
        write!(f, "{}", label)
    }
}

impl Region {
    /// Check the field constraints enforced at the ingestion boundary.
    pub fn validate(&self) -> Result<()> {
        if self.region_id.is_empty() {
            return Err(DataError::InvalidRecord(
                "Region is missing a region_id".to_string(),
            ));
        }
        if self.population == 0 {
            return Err(DataError::InvalidRecord(format!(
                "Region {} has zero population",
                self.region_id
            )));
        }
        if !self.demand_score.is_finite() || self.demand_score < 0.0 {
            return Err(DataError::InvalidRecord(format!(
                "Region {} has invalid demand score {}",
                self.region_id, self.demand_score
            )));
        }
        if !self.avg_monthly_transactions.is_finite() || self.avg_monthly_transactions < 0.0 {
            return Err(DataError::InvalidRecord(format!(
                "Region {} has invalid monthly transactions {}",
                self.region_id, self.avg_monthly_transactions
            )));
        }
        Ok(())
    }
}

impl Branch {
    /// Check the field constraints enforced at the ingestion boundary.
    pub fn validate(&self) -> Result<()> {
        if self.branch_id.is_empty() {
            return Err(DataError::InvalidRecord(
                "Branch is missing a branch_id".to_string(),
            ));
        }
        if self.region_id.is_empty() {
            return Err(DataError::InvalidRecord(format!(
                "Branch {} is missing a region_id",
                self.branch_id
            )));
        }
        if !self.monthly_transactions.is_finite() || self.monthly_transactions < 0.0 {
            return Err(DataError::InvalidRecord(format!(
                "Branch {} has negative capacity {}",
                self.branch_id, self.monthly_transactions
            )));
        }
        Ok(())
    }
}

impl MonthlyRecord {
    /// Check the field constraints enforced at the ingestion boundary.
    pub fn validate(&self) -> Result<()> {
        if self.region_id.is_empty() {
            return Err(DataError::InvalidRecord(
                "Monthly record is missing a region_id".to_string(),
            ));
        }
        if self.date.day0() != 0 {
            return Err(DataError::InvalidRecord(format!(
                "Monthly record for {} is not dated on the first of the month: {}",
                self.region_id, self.date
            )));
        }
        if !self.transactions.is_finite() || self.transactions < 0.0 {
            return Err(DataError::InvalidRecord(format!(
                "Monthly record for {} on {} has invalid transactions {}",
                self.region_id, self.date, self.transactions
            )));
        }
        Ok(())
    }
}
