//! CSV ingestion for the three record collections
//!
//! This is the boundary where malformed input is rejected: every row is
//! validated against the record constraints, and monthly series are checked
//! for ordering and duplicate months before they reach the engine.

use crate::{Branch, DataError, MonthlyRecord, Region, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loader for region, branch, and monthly-record collections
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load and validate regions from a CSV file with headers matching the
    /// `Region` field names.
    pub fn load_regions<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
        Self::regions_from_reader(File::open(path)?)
    }

    /// Load and validate regions from any reader.
    pub fn regions_from_reader<R: Read>(reader: R) -> Result<Vec<Region>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut regions = Vec::new();
        for row in csv_reader.deserialize() {
            let region: Region = row?;
            region.validate()?;
            regions.push(region);
        }
        Ok(regions)
    }

    /// Load and validate branches from a CSV file.
    pub fn load_branches<P: AsRef<Path>>(path: P) -> Result<Vec<Branch>> {
        Self::branches_from_reader(File::open(path)?)
    }

    /// Load and validate branches from any reader.
    pub fn branches_from_reader<R: Read>(reader: R) -> Result<Vec<Branch>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut branches = Vec::new();
        for row in csv_reader.deserialize() {
            let branch: Branch = row?;
            branch.validate()?;
            branches.push(branch);
        }
        Ok(branches)
    }

    /// Load and validate monthly records from a CSV file. Rows are sorted
    /// by region and date, and each region's series is checked for
    /// duplicate months.
    pub fn load_monthly_records<P: AsRef<Path>>(path: P) -> Result<Vec<MonthlyRecord>> {
        Self::monthly_records_from_reader(File::open(path)?)
    }

    /// Load and validate monthly records from any reader.
    pub fn monthly_records_from_reader<R: Read>(reader: R) -> Result<Vec<MonthlyRecord>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: MonthlyRecord = row?;
            record.validate()?;
            records.push(record);
        }

        records.sort_by(|a, b| a.region_id.cmp(&b.region_id).then(a.date.cmp(&b.date)));

        for window in records.windows(2) {
            if window[0].region_id == window[1].region_id && window[0].date == window[1].date {
                return Err(DataError::InvalidSeries(format!(
                    "Duplicate month {} for region {}",
                    window[0].date, window[0].region_id
                )));
            }
        }

        Ok(records)
    }
}

/// Check that one region's series is chronologically ordered with no
/// repeated months. The engine assumes this holds for any history it is
/// handed; series coming through `DataLoader` already satisfy it.
pub fn validate_series(records: &[MonthlyRecord]) -> Result<()> {
    for window in records.windows(2) {
        if window[0].region_id != window[1].region_id {
            return Err(DataError::InvalidSeries(format!(
                "Series mixes regions {} and {}",
                window[0].region_id, window[1].region_id
            )));
        }
        if window[0].date >= window[1].date {
            return Err(DataError::InvalidSeries(format!(
                "Series for {} is not strictly increasing at {}",
                window[1].region_id, window[1].date
            )));
        }
    }
    Ok(())
}
