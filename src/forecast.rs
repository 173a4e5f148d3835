/// Anomaly-persistence forecasting.
///
/// A simple exponential-decay extrapolation, not a physical weather model:
/// the current deviation from the long-term average is assumed to regress
/// toward the seasonal norm at a fixed per-day rate. Output is labelled as
/// projected and must never be presented as predictive-grade guidance.
///
/// Both variants refuse to forecast from a missing or zero baseline rather
/// than divide by zero or emit NaN: the temperature variant returns an
/// empty sequence, the rainfall variant returns `None`.

use chrono::{Datelike, Days, NaiveDate};

use crate::config::AnalysisConfig;
use crate::model::{BaselineRecord, ForecastPoint};
use crate::parse::round1;
use crate::timespan::last_day_of_month;

/// A month's baseline temperature for the station, treating a zero entry
/// like a missing one.
fn month_temp(baselines: &[BaselineRecord], station: &str, month: u32) -> Option<f64> {
    crate::analysis::baseline::monthly(baselines, station, month)
        .and_then(|b| b.temp_avg)
        .filter(|&v| v != 0.0)
}

fn month_rain(baselines: &[BaselineRecord], station: &str, month: u32) -> Option<f64> {
    crate::analysis::baseline::monthly(baselines, station, month)
        .and_then(|b| b.rain_avg)
        .filter(|&v| v > 0.0)
}

// ---------------------------------------------------------------------------
// Temperature variant
// ---------------------------------------------------------------------------

/// Projects daily mean temperature beyond the last observation.
///
/// `anomaly = last_value - baseline(month of last_date)`; each future day
/// emits `baseline(that month) + anomaly * decay^i`, rounded to one
/// decimal. When the horizon crosses into a month with no baseline entry,
/// the current month's baseline is reused. No current-month baseline, no
/// forecast.
pub fn forecast_temperature(
    station: &str,
    last_date: NaiveDate,
    last_value: f64,
    baselines: &[BaselineRecord],
    config: &AnalysisConfig,
) -> Vec<ForecastPoint> {
    let Some(current_baseline) = month_temp(baselines, station, last_date.month()) else {
        return Vec::new();
    };
    let anomaly = last_value - current_baseline;

    let mut points = Vec::with_capacity(config.forecast_horizon_days as usize);
    for i in 1..=config.forecast_horizon_days {
        let date = last_date + Days::new(u64::from(i));
        let base = month_temp(baselines, station, date.month()).unwrap_or(current_baseline);
        let value = base + anomaly * config.temperature_decay.powi(i as i32);
        points.push(ForecastPoint {
            date,
            value: round1(value),
            forecast: true,
        });
    }
    points
}

// ---------------------------------------------------------------------------
// Rainfall variant
// ---------------------------------------------------------------------------

/// How the projected month total compares to the long-term average, at a
/// ±20% tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterSupplyOutlook {
    Surplus,
    Normal,
    Deficit,
}

/// Whether the month-to-date accumulation is running above, near, or below
/// the pace the baseline implies, at a ±10% tolerance on the trend factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainfallTrend {
    AboveNormal,
    NearNormal,
    BelowNormal,
}

/// Rainfall projection for the remainder of the horizon plus the summary
/// statistics the trend panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallForecast {
    pub points: Vec<ForecastPoint>,
    /// Month-to-date observed accumulation.
    pub current_total: f64,
    /// Observed accumulation plus all projected daily amounts.
    pub projected_total: f64,
    /// The month's long-term average total.
    pub baseline: f64,
    pub trend: RainfallTrend,
    pub outlook: WaterSupplyOutlook,
}

/// Projects daily rainfall from the month-to-date accumulation.
///
/// The trend factor is the ratio of the observed accumulation to what a
/// uniform daily pace of the baseline would have produced by `last_date`,
/// clamped to the configured bounds. Each projected day scales the uniform
/// daily amount by the trend factor decayed toward 1 (neutral):
/// `1 + (trend - 1) * decay^i`. Returns `None` when the month has no
/// positive baseline.
pub fn forecast_rainfall(
    station: &str,
    last_date: NaiveDate,
    month_to_date_total: f64,
    baselines: &[BaselineRecord],
    config: &AnalysisConfig,
) -> Option<RainfallForecast> {
    let baseline = month_rain(baselines, station, last_date.month())?;

    let days_in_month = last_day_of_month(last_date).day() as f64;
    let daily_norm = baseline / days_in_month;
    let expected_to_date = daily_norm * last_date.day() as f64;
    let trend = (month_to_date_total / expected_to_date)
        .clamp(config.trend_factor_min, config.trend_factor_max);

    // The running total accumulates unrounded amounts; rounding happens
    // only on the displayed per-day points and on the final total.
    let mut points = Vec::with_capacity(config.forecast_horizon_days as usize);
    let mut projected_total = month_to_date_total;
    for i in 1..=config.forecast_horizon_days {
        let date = last_date + Days::new(u64::from(i));
        let adjusted = 1.0 + (trend - 1.0) * config.rainfall_trend_decay.powi(i as i32);
        let value = daily_norm * adjusted;
        projected_total += value;
        points.push(ForecastPoint {
            date,
            value: round1(value),
            forecast: true,
        });
    }

    let trend_class = if trend > 1.1 {
        RainfallTrend::AboveNormal
    } else if trend < 0.9 {
        RainfallTrend::BelowNormal
    } else {
        RainfallTrend::NearNormal
    };
    let outlook = if projected_total > baseline * 1.2 {
        WaterSupplyOutlook::Surplus
    } else if projected_total < baseline * 0.8 {
        WaterSupplyOutlook::Deficit
    } else {
        WaterSupplyOutlook::Normal
    };

    Some(RainfallForecast {
        points,
        current_total: round1(month_to_date_total),
        projected_total: round1(projected_total),
        baseline,
        trend: trend_class,
        outlook,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn baselines() -> Vec<BaselineRecord> {
        vec![
            BaselineRecord {
                station: "A".into(),
                month: 5,
                temp_avg: Some(25.0),
                rain_avg: Some(155.0),
            },
            BaselineRecord {
                station: "A".into(),
                month: 6,
                temp_avg: Some(26.0),
                rain_avg: Some(180.0),
            },
        ]
    }

    fn config(horizon: u32) -> AnalysisConfig {
        AnalysisConfig {
            forecast_horizon_days: horizon,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn test_temperature_anomaly_decays_toward_baseline() {
        // anomaly = 30 - 25 = 5; decay 0.85.
        let points =
            forecast_temperature("A", d("2024-05-10"), 30.0, &baselines(), &config(3));
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, d("2024-05-11"));
        assert_eq!(points[0].value, 29.3); // 25 + 5 * 0.85
        assert_eq!(points[1].value, 28.6); // 25 + 5 * 0.7225
        assert_eq!(points[2].value, 28.1); // 25 + 5 * 0.614125
        assert!(points.iter().all(|p| p.forecast));
    }

    #[test]
    fn test_temperature_rolls_over_to_next_months_baseline() {
        let points =
            forecast_temperature("A", d("2024-05-30"), 30.0, &baselines(), &config(3));
        // 2024-06-01 onward uses the June baseline (26.0).
        assert_eq!(points[0].date, d("2024-05-31"));
        assert_eq!(points[1].date, d("2024-06-01"));
        assert_eq!(points[1].value, round1(26.0 + 5.0 * 0.85_f64.powi(2)));
    }

    #[test]
    fn test_temperature_falls_back_when_next_month_has_no_entry() {
        // No July entry; the horizon crossing into July reuses June's value.
        let points =
            forecast_temperature("A", d("2024-06-29"), 28.0, &baselines(), &config(3));
        assert_eq!(points[2].date, d("2024-07-02"));
        assert_eq!(points[2].value, round1(26.0 + 2.0 * 0.85_f64.powi(3)));
    }

    #[test]
    fn test_temperature_converges_toward_baseline() {
        let points =
            forecast_temperature("A", d("2024-05-01"), 30.0, &baselines(), &config(10));
        assert_eq!(points.len(), 10);
        let first = (points[0].value - 25.0).abs();
        let last = (points[9].value - 25.0).abs();
        assert!(last < first);
    }

    #[test]
    fn test_temperature_skips_on_missing_or_zero_baseline() {
        assert!(forecast_temperature("B", d("2024-05-10"), 30.0, &baselines(), &config(3))
            .is_empty());
        let zeroed = vec![BaselineRecord {
            station: "A".into(),
            month: 5,
            temp_avg: Some(0.0),
            rain_avg: None,
        }];
        assert!(
            forecast_temperature("A", d("2024-05-10"), 30.0, &zeroed, &config(3)).is_empty()
        );
    }

    #[test]
    fn test_rainfall_trend_factor_is_clamped() {
        // Baseline 155 over May (31 days) = 5 mm/day; by the 10th the
        // uniform expectation is 50 mm. 500 mm observed is a 10x pace,
        // clamped to 2.0 — so day one projects 5 * (1 + 1 * 0.9) = 9.5.
        let fc = forecast_rainfall("A", d("2024-05-10"), 500.0, &baselines(), &config(2))
            .unwrap();
        assert_eq!(fc.points[0].value, 9.5);
        assert_eq!(fc.points[1].value, round1(5.0 * (1.0 + 0.9_f64.powi(2))));
        assert_eq!(fc.trend, RainfallTrend::AboveNormal);
    }

    #[test]
    fn test_rainfall_near_normal_pace() {
        // 50 mm by the 10th is exactly the uniform pace: trend 1.0, every
        // projected day is the plain daily norm.
        let fc = forecast_rainfall("A", d("2024-05-10"), 50.0, &baselines(), &config(3))
            .unwrap();
        assert_eq!(fc.trend, RainfallTrend::NearNormal);
        assert!(fc.points.iter().all(|p| p.value == 5.0));
        assert_eq!(fc.projected_total, 65.0);
        assert_eq!(fc.outlook, WaterSupplyOutlook::Deficit); // 65 < 155 * 0.8
    }

    #[test]
    fn test_rainfall_total_accumulates_before_rounding() {
        // Baseline 100 over June (30 days) gives a daily norm of 10/3 mm,
        // which displays as 3.3; summing the displayed values would lose
        // ~0.1 mm over three days.
        let june = vec![BaselineRecord {
            station: "A".into(),
            month: 6,
            temp_avg: None,
            rain_avg: Some(100.0),
        }];
        let fc = forecast_rainfall("A", d("2024-06-10"), 33.4, &june, &config(3)).unwrap();
        assert!(fc.points.iter().all(|p| p.value == 3.3));
        assert_eq!(fc.projected_total, 43.4); // not 33.4 + 3 * 3.3 = 43.3
    }

    #[test]
    fn test_rainfall_skips_without_positive_baseline() {
        assert!(forecast_rainfall("B", d("2024-05-10"), 40.0, &baselines(), &config(3))
            .is_none());
        let zeroed = vec![BaselineRecord {
            station: "A".into(),
            month: 5,
            temp_avg: None,
            rain_avg: Some(0.0),
        }];
        assert!(forecast_rainfall("A", d("2024-05-10"), 40.0, &zeroed, &config(3)).is_none());
    }
}
