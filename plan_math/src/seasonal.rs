//! Monthly seasonal multipliers derived from detrended observations

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Per-calendar-month scaling factors capturing the average deviation of a
/// series from its trend. Months with no observations keep a multiplier of
/// 1.0, meaning no seasonal adjustment is available for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProfile {
    multipliers: [f64; 12],
}

impl Default for SeasonalProfile {
    fn default() -> Self {
        Self::flat()
    }
}

impl SeasonalProfile {
    /// A profile with no seasonal adjustment in any month.
    pub fn flat() -> Self {
        Self {
            multipliers: [1.0; 12],
        }
    }

    /// Build a profile from `(month, ratio)` observations, where `month` is
    /// 1-12 and `ratio` is an observation divided by its trend value. The
    /// multiplier for each month is the mean of that month's ratios.
    pub fn from_observations<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let mut sums = [0.0f64; 12];
        let mut counts = [0usize; 12];

        for (month, ratio) in observations {
            if !(1..=12).contains(&month) {
                return Err(MathError::InvalidInput(format!(
                    "Month must be 1-12, got {}",
                    month
                )));
            }
            let idx = (month - 1) as usize;
            sums[idx] += ratio;
            counts[idx] += 1;
        }

        let mut multipliers = [1.0f64; 12];
        for idx in 0..12 {
            if counts[idx] > 0 {
                multipliers[idx] = sums[idx] / counts[idx] as f64;
            }
        }

        Ok(Self { multipliers })
    }

    /// Multiplier for a calendar month (1-12).
    pub fn multiplier(&self, month: u32) -> Result<f64> {
        if !(1..=12).contains(&month) {
            return Err(MathError::InvalidInput(format!(
                "Month must be 1-12, got {}",
                month
            )));
        }
        Ok(self.multipliers[(month - 1) as usize])
    }

    /// All twelve multipliers, January first.
    pub fn multipliers(&self) -> &[f64; 12] {
        &self.multipliers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_profile() {
        let profile = SeasonalProfile::flat();
        for month in 1..=12 {
            assert_eq!(profile.multiplier(month).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_mean_per_month() {
        let profile =
            SeasonalProfile::from_observations(vec![(1, 1.2), (1, 0.8), (6, 1.5)]).unwrap();

        assert!((profile.multiplier(1).unwrap() - 1.0).abs() < 1e-9);
        assert!((profile.multiplier(6).unwrap() - 1.5).abs() < 1e-9);
        // Unobserved months default to no adjustment
        assert_eq!(profile.multiplier(12).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_month_rejected() {
        let result = SeasonalProfile::from_observations(vec![(0, 1.0)]);
        assert!(matches!(result, Err(MathError::InvalidInput(_))));

        let profile = SeasonalProfile::flat();
        assert!(profile.multiplier(13).is_err());
    }
}
