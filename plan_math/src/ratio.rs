//! Division-guard policies for capacity calculations

/// Divide `numerator` by `denominator`, flooring the denominator at `floor`
/// so that empty or zero-capacity denominators yield a finite ratio instead
/// of an error. The floor must be positive.
///
/// This is the single guard policy used for demand/capacity ratios; the
/// substitution value is part of the classification contract, so callers
/// pass the floor explicitly rather than relying on a hidden constant.
pub fn safe_ratio(numerator: f64, denominator: f64, floor: f64) -> f64 {
    debug_assert!(floor > 0.0, "ratio floor must be positive");
    numerator / denominator.max(floor)
}
