/// Per-station period characteristics: the row behind the station summary
/// table. Means over present readings, extrema with their dates, rainfall
/// totals and rain-day counts, plus the long-term-average comparison
/// columns when a baseline entry exists for the station.

use chrono::NaiveDate;

use crate::analysis::baseline::{monthly, rain_deviation_pct, temp_anomaly};
use crate::model::{BaselineRecord, ObservationRecord, StationSummary};
use crate::parse::round1;

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 {
        None
    } else {
        Some(round1(sum / n as f64))
    }
}

fn dated_max(pairs: impl Iterator<Item = (f64, NaiveDate)>) -> (Option<f64>, Option<NaiveDate>) {
    let mut best: Option<(f64, NaiveDate)> = None;
    for (v, d) in pairs {
        match best {
            Some((bv, _)) if v <= bv => {}
            _ => best = Some((v, d)),
        }
    }
    (best.map(|(v, _)| v), best.map(|(_, d)| d))
}

fn dated_min(pairs: impl Iterator<Item = (f64, NaiveDate)>) -> (Option<f64>, Option<NaiveDate>) {
    let mut best: Option<(f64, NaiveDate)> = None;
    for (v, d) in pairs {
        match best {
            Some((bv, _)) if v >= bv => {}
            _ => best = Some((v, d)),
        }
    }
    (best.map(|(v, _)| v), best.map(|(_, d)| d))
}

/// Characterizes one station over a period. `records` holds only that
/// station's rows, in date order; `baselines` is the full reference table
/// and `month` selects the climatology entry to compare against.
pub fn summarize_station(
    station: &str,
    records: &[ObservationRecord],
    baselines: &[BaselineRecord],
    month: u32,
) -> StationSummary {
    let temp_mean = mean(records.iter().filter_map(|r| r.temp_avg));
    let (temp_max, temp_max_date) =
        dated_max(records.iter().filter_map(|r| r.temp_max.map(|v| (v, r.date))));
    let (temp_min, temp_min_date) =
        dated_min(records.iter().filter_map(|r| r.temp_min.map(|v| (v, r.date))));

    let rain_total = round1(records.iter().filter_map(|r| r.rain_24h).sum());
    let rain_days = records
        .iter()
        .filter(|r| r.rain_24h.is_some_and(|v| v > 0.0))
        .count();
    let (rain_max, rain_max_date) =
        dated_max(records.iter().filter_map(|r| r.rain_24h.map(|v| (v, r.date))));

    let humidity_mean = mean(records.iter().filter_map(|r| r.humidity_avg));
    let (humidity_min, humidity_min_date) = dated_min(
        records
            .iter()
            .filter_map(|r| r.humidity_min.filter(|&v| v > 0.0).map(|v| (v, r.date))),
    );

    let entry = monthly(baselines, station, month);
    let baseline_temp = entry.and_then(|b| b.temp_avg);
    let baseline_rain = entry.and_then(|b| b.rain_avg);

    let has_data = temp_mean.is_some()
        || temp_max.is_some()
        || temp_min.is_some()
        || rain_max.is_some()
        || humidity_mean.is_some()
        || humidity_min.is_some();

    StationSummary {
        station: station.to_string(),
        temp_mean,
        temp_max,
        temp_max_date,
        temp_min,
        temp_min_date,
        rain_total,
        rain_days,
        rain_max,
        rain_max_date,
        humidity_mean,
        humidity_min,
        humidity_min_date,
        baseline_temp,
        baseline_rain,
        temp_anomaly: temp_anomaly(temp_mean, baseline_temp),
        rain_deviation_pct: rain_deviation_pct(rain_total, baseline_rain),
        has_data,
    }
}

/// Builds the summary table: one row per distinct station in the batch,
/// in station-name order.
pub fn station_table(
    records: &[ObservationRecord],
    baselines: &[BaselineRecord],
    month: u32,
) -> Vec<StationSummary> {
    let mut names: Vec<&str> = Vec::new();
    for rec in records {
        if !names.contains(&rec.station.as_str()) {
            names.push(&rec.station);
        }
    }
    names.sort_unstable();
    names
        .into_iter()
        .map(|name| {
            let rows: Vec<ObservationRecord> = records
                .iter()
                .filter(|r| r.station == name)
                .cloned()
                .collect();
            summarize_station(name, &rows, baselines, month)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Day-over-day deltas
// ---------------------------------------------------------------------------

/// Change of one station's headline readings relative to the previous day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDelta {
    pub temp_avg: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub rain_24h: Option<f64>,
}

/// Signed change from `previous` to `current`, one decimal per field.
/// A field missing on either day yields no delta for that field.
pub fn day_delta(current: &ObservationRecord, previous: &ObservationRecord) -> DayDelta {
    let diff = |a: Option<f64>, b: Option<f64>| match (a, b) {
        (Some(a), Some(b)) => Some(round1(a - b)),
        _ => None,
    };
    DayDelta {
        temp_avg: diff(current.temp_avg, previous.temp_avg),
        temp_max: diff(current.temp_max, previous.temp_max),
        temp_min: diff(current.temp_min, previous.temp_min),
        rain_24h: diff(current.rain_24h, previous.rain_24h),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::base_record;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn obs(date: &str, temp_avg: f64, temp_max: f64, rain: Option<f64>) -> ObservationRecord {
        let mut rec = base_record("A", date);
        rec.temp_avg = Some(temp_avg);
        rec.temp_max = Some(temp_max);
        rec.rain_24h = rain;
        rec
    }

    #[test]
    fn test_station_means_and_dated_extrema() {
        let records = vec![
            obs("2024-05-01", 29.0, 34.0, Some(0.0)),
            obs("2024-05-02", 30.0, 36.5, Some(22.4)),
            obs("2024-05-03", 28.7, 33.1, Some(5.0)),
        ];
        let summary = summarize_station("A", &records, &[], 5);
        assert_eq!(summary.temp_mean, Some(29.2));
        assert_eq!(summary.temp_max, Some(36.5));
        assert_eq!(summary.temp_max_date, Some(d("2024-05-02")));
        assert_eq!(summary.rain_total, 27.4);
        assert_eq!(summary.rain_days, 2); // the recorded 0.0 is not a rain day
        assert_eq!(summary.rain_max, Some(22.4));
        assert!(summary.has_data);
        assert_eq!(summary.temp_anomaly, None); // no baseline supplied
    }

    #[test]
    fn test_station_baseline_columns() {
        let records = vec![
            obs("2024-05-01", 30.0, 36.0, Some(70.0)),
            obs("2024-05-02", 31.0, 37.0, Some(80.0)),
        ];
        let baselines = vec![BaselineRecord {
            station: "A".into(),
            month: 5,
            temp_avg: Some(28.5),
            rain_avg: Some(120.0),
        }];
        let summary = summarize_station("A", &records, &baselines, 5);
        assert_eq!(summary.baseline_temp, Some(28.5));
        assert_eq!(summary.temp_anomaly, Some(2.0));
        assert_eq!(summary.rain_total, 150.0);
        assert_eq!(summary.rain_deviation_pct, Some(25.0));
    }

    #[test]
    fn test_station_with_no_observations_flags_no_data() {
        let records = vec![base_record("A", "2024-05-01")];
        let summary = summarize_station("A", &records, &[], 5);
        assert!(!summary.has_data);
        assert_eq!(summary.rain_total, 0.0);
        assert_eq!(summary.rain_days, 0);
    }

    #[test]
    fn test_table_has_one_row_per_station_sorted() {
        let mut b = base_record("B", "2024-05-01");
        b.temp_avg = Some(30.0);
        let mut a1 = base_record("A", "2024-05-01");
        a1.temp_avg = Some(28.0);
        let mut a2 = base_record("A", "2024-05-02");
        a2.temp_avg = Some(29.0);

        let table = station_table(&[b, a1, a2], &[], 5);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].station, "A");
        assert_eq!(table[0].temp_mean, Some(28.5));
        assert_eq!(table[1].station, "B");
    }

    #[test]
    fn test_day_delta_signed_and_partial() {
        let today = obs("2024-05-02", 30.2, 36.0, None);
        let yesterday = obs("2024-05-01", 29.0, 36.5, Some(4.0));
        let delta = day_delta(&today, &yesterday);
        assert_eq!(delta.temp_avg, Some(1.2));
        assert_eq!(delta.temp_max, Some(-0.5));
        assert_eq!(delta.rain_24h, None);
    }
}
