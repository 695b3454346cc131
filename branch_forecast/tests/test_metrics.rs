use approx::assert_relative_eq;
use branch_data::utils::generate_monthly_series;
use branch_forecast::metrics::{evaluate_forecast, seasonal_pattern};
use chrono::NaiveDate;

#[test]
fn test_accuracy_on_known_errors() {
    let forecast = vec![100.0, 200.0, 300.0];
    let actual = vec![110.0, 190.0, 310.0];

    let accuracy = evaluate_forecast(&forecast, &actual).unwrap();

    assert_relative_eq!(accuracy.mae, 10.0, epsilon = 1e-9);
    assert_relative_eq!(accuracy.mse, 100.0, epsilon = 1e-9);
    assert_relative_eq!(accuracy.rmse, 10.0, epsilon = 1e-9);
    assert!(accuracy.mape > 0.0);
}

#[test]
fn test_perfect_forecast_has_zero_error() {
    let values = vec![50.0, 60.0, 70.0];
    let accuracy = evaluate_forecast(&values, &values).unwrap();

    assert_relative_eq!(accuracy.mae, 0.0, epsilon = 1e-12);
    assert_relative_eq!(accuracy.rmse, 0.0, epsilon = 1e-12);
}

#[test]
fn test_mismatched_lengths_rejected() {
    assert!(evaluate_forecast(&[1.0, 2.0], &[1.0]).is_err());
    assert!(evaluate_forecast(&[], &[]).is_err());
}

#[test]
fn test_accuracy_display_lists_metrics() {
    let accuracy = evaluate_forecast(&[100.0], &[90.0]).unwrap();
    let text = format!("{}", accuracy);

    assert!(text.contains("MAE"));
    assert!(text.contains("RMSE"));
    assert!(text.contains("MAPE"));
}

#[test]
fn test_seasonal_pattern_recovers_shape() {
    // Flat trend with a pronounced seasonal swing over three full years
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let records = generate_monthly_series("RG001", start, 36, 10_000.0, 0.0, 0.2);

    let pattern = seasonal_pattern(&records);
    assert_eq!(pattern.len(), 12);

    // Months must deviate in both directions around the baseline
    assert!(pattern.iter().any(|p| p.vs_baseline_pct > 5.0));
    assert!(pattern.iter().any(|p| p.vs_baseline_pct < -5.0));

    for p in &pattern {
        assert!((1..=12).contains(&p.month));
        assert!(p.mean_transactions > 0.0);
    }
}

#[test]
fn test_seasonal_pattern_of_flat_series_is_flat() {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let records = generate_monthly_series("RG001", start, 24, 5_000.0, 0.0, 0.0);

    for p in seasonal_pattern(&records) {
        assert_relative_eq!(p.vs_baseline_pct, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_seasonal_pattern_empty_input() {
    assert!(seasonal_pattern(&[]).is_empty());
}
