use branch_data::{Branch, CoverageStatus, Region};
use branch_forecast::coverage::CoverageClassifier;
use branch_forecast::policy::PlanningPolicy;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn region(region_id: &str, avg_monthly_transactions: f64) -> Region {
    Region {
        region_id: region_id.to_string(),
        region_name: format!("{} Name", region_id),
        province: "Ontario".to_string(),
        population: 100_000,
        demand_score: 2.0,
        avg_monthly_transactions,
    }
}

fn branch(branch_id: &str, region_id: &str, monthly_transactions: f64) -> Branch {
    Branch {
        branch_id: branch_id.to_string(),
        region_id: region_id.to_string(),
        monthly_transactions,
    }
}

#[test]
fn test_no_branches_means_no_coverage() {
    let classifier = CoverageClassifier::default();
    let summary = classifier.classify(&region("RG001", 50_000.0), &[]);

    assert_eq!(summary.branch_count, 0);
    assert_eq!(summary.total_branch_capacity, 0.0);
    assert_eq!(summary.coverage_status, CoverageStatus::NoCoverage);
    assert_eq!(summary.capacity_gap, 50_000.0);
}

#[test]
fn test_capacity_gap_is_exact() {
    let classifier = CoverageClassifier::default();
    let branches = vec![
        branch("BR001", "RG001", 30_000.0),
        branch("BR002", "RG001", 25_000.0),
        // Belongs to another region, must be ignored
        branch("BR003", "RG002", 99_000.0),
    ];
    let summary = classifier.classify(&region("RG001", 80_000.0), &branches);

    assert_eq!(summary.branch_count, 2);
    assert_eq!(summary.total_branch_capacity, 55_000.0);
    assert_eq!(summary.capacity_gap, 80_000.0 - 55_000.0);
}

#[rstest]
#[case(4.0, CoverageStatus::Underserved)]
#[case(2.01, CoverageStatus::Underserved)]
// Boundaries are strict: exactly 2.0 and exactly 0.5 stay Balanced
#[case(2.0, CoverageStatus::Balanced)]
#[case(1.0, CoverageStatus::Balanced)]
#[case(0.5, CoverageStatus::Balanced)]
#[case(0.49, CoverageStatus::Oversupplied)]
#[case(0.1, CoverageStatus::Oversupplied)]
fn test_ratio_boundaries(#[case] ratio: f64, #[case] expected: CoverageStatus) {
    let capacity = 10_000.0;
    let classifier = CoverageClassifier::default();
    let summary = classifier.classify(
        &region("RG001", ratio * capacity),
        &[branch("BR001", "RG001", capacity)],
    );

    assert_eq!(summary.coverage_status, expected);
}

#[test]
fn test_zero_capacity_with_branches_uses_floor() {
    // A branch with zero capacity still counts for branch_count, and the
    // ratio falls back to the capacity floor instead of dividing by zero.
    let classifier = CoverageClassifier::default();
    let summary = classifier.classify(
        &region("RG001", 50_000.0),
        &[branch("BR001", "RG001", 0.0)],
    );

    assert_eq!(summary.branch_count, 1);
    assert_eq!(summary.coverage_status, CoverageStatus::Underserved);
}

#[test]
fn test_classification_is_idempotent() {
    let classifier = CoverageClassifier::new(PlanningPolicy::default());
    let r = region("RG001", 120_000.0);
    let branches = vec![branch("BR001", "RG001", 40_000.0)];

    let first = classifier.classify(&r, &branches);
    let second = classifier.classify(&r, &branches);

    assert_eq!(first.capacity_gap, second.capacity_gap);
    assert_eq!(first.coverage_status, second.coverage_status);
    assert_eq!(first.branch_count, second.branch_count);
}

#[test]
fn test_classify_all_preserves_region_order() {
    let classifier = CoverageClassifier::default();
    let regions = vec![
        region("RG002", 10_000.0),
        region("RG001", 20_000.0),
        region("RG003", 0.0),
    ];
    let branches = vec![branch("BR001", "RG001", 10_000.0)];

    let summaries = classifier.classify_all(&regions, &branches);

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].region_id, "RG002");
    assert_eq!(summaries[1].region_id, "RG001");
    assert_eq!(summaries[2].region_id, "RG003");
    assert_eq!(summaries[0].coverage_status, CoverageStatus::NoCoverage);
}

#[test]
fn test_custom_thresholds_respected() {
    let policy = PlanningPolicy {
        underserved_ratio: 1.5,
        ..PlanningPolicy::default()
    };
    let classifier = CoverageClassifier::new(policy);
    let summary = classifier.classify(
        &region("RG001", 16_000.0),
        &[branch("BR001", "RG001", 10_000.0)],
    );

    // Ratio 1.6 exceeds the lowered threshold
    assert_eq!(summary.coverage_status, CoverageStatus::Underserved);
}
