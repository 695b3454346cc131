//! Fit and project a single region's monthly series.
//!
//! Run with: cargo run --example regional_forecast

use branch_data::utils::generate_monthly_series;
use branch_forecast::metrics::evaluate_forecast;
use branch_forecast::TrendSeasonalForecaster;
use chrono::NaiveDate;

fn main() -> branch_forecast::Result<()> {
    // Three years of history: growing 2,000 transactions/month with a
    // mild seasonal swing
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date");
    let history = generate_monthly_series("RG001", start, 36, 80_000.0, 2_000.0, 0.08);

    let forecaster = TrendSeasonalForecaster::default();
    let fitted = forecaster.fit(&history)?;

    println!("Fitted trend for RG001:");
    println!("  slope:     {:+.1} transactions/month", fitted.slope());
    println!("  intercept: {:.1}", fitted.intercept());
    println!();

    let forecast = fitted.forecast(6)?;
    println!("Six-month projection:");
    for point in &forecast.points {
        println!(
            "  {}  trend {:>10.0}  forecast {:>10.0}",
            point.date, point.trend_value, point.forecast_value
        );
    }

    // Holdout check: refit on the first 30 months and score the fit
    // against the last 6 observed values
    let (train, holdout) = history.split_at(30);
    let refit = forecaster.fit(train)?;
    let backcast = refit.forecast(6)?;

    let predicted: Vec<f64> = backcast.points.iter().map(|p| p.forecast_value).collect();
    let actual: Vec<f64> = holdout.iter().map(|r| r.transactions).collect();
    let accuracy = evaluate_forecast(&predicted, &actual)?;

    println!();
    println!("{}", accuracy);

    Ok(())
}
