/// Period-scope reductions.
///
/// Two shapes of reduction share this module: the temporal one folds a
/// sequence of daily summaries into extremum-of-extrema with the date each
/// extreme occurred, and the group one folds a station-group's raw records
/// directly, adding a rainfall total on top of the extrema. Both inherit
/// the daily aggregator's tie rule: the earlier contributor keeps the
/// attribution unless strictly beaten.

use crate::config::AnalysisConfig;
use crate::model::{
    DailySummary, DatedExtremum, DatedWindExtremum, Extremum, GroupSummary, ObservationRecord,
    PeriodSummary, WindExtremum,
};
use crate::parse::round1;
use crate::weather::{has_strong_wind, has_thunder};
use crate::wind::extract_max_wind;

// ---------------------------------------------------------------------------
// Temporal reduction (daily summaries → period summary)
// ---------------------------------------------------------------------------

fn fold_dated_min(acc: &mut Option<DatedExtremum>, day: &DailySummary, e: &Option<Extremum>) {
    if let Some(e) = e {
        match acc {
            Some(best) if e.value >= best.value => {}
            _ => {
                *acc = Some(DatedExtremum {
                    value: e.value,
                    station: e.station.clone(),
                    date: day.date,
                })
            }
        }
    }
}

fn fold_dated_max(acc: &mut Option<DatedExtremum>, day: &DailySummary, e: &Option<Extremum>) {
    if let Some(e) = e {
        match acc {
            Some(best) if e.value <= best.value => {}
            _ => {
                *acc = Some(DatedExtremum {
                    value: e.value,
                    station: e.station.clone(),
                    date: day.date,
                })
            }
        }
    }
}

fn merge_stations(acc: &mut Vec<String>, incoming: &[String]) {
    for s in incoming {
        if !acc.contains(s) {
            acc.push(s.clone());
        }
    }
}

/// Folds consecutive daily summaries into a period summary. Returns `None`
/// for an empty sequence. The input is expected in date order; the period
/// bounds are taken from the first and last entries.
pub fn summarize_period(days: &[DailySummary]) -> Option<PeriodSummary> {
    let first = days.first()?;
    let last = days.last()?;

    let mut temp_min: Option<DatedExtremum> = None;
    let mut temp_max: Option<DatedExtremum> = None;
    let mut humidity_min: Option<DatedExtremum> = None;
    let mut rain_max: Option<DatedExtremum> = None;
    let mut wind_max: Option<DatedWindExtremum> = None;
    let mut thunder_stations: Vec<String> = Vec::new();
    let mut strong_wind_stations: Vec<String> = Vec::new();
    let mut stations: Vec<String> = Vec::new();

    for day in days {
        fold_dated_min(&mut temp_min, day, &day.temp_min);
        fold_dated_max(&mut temp_max, day, &day.temp_max);
        fold_dated_min(&mut humidity_min, day, &day.humidity_min);
        fold_dated_max(&mut rain_max, day, &day.rain_max);

        if let Some(w) = &day.wind_max {
            match &wind_max {
                Some(best) if w.speed <= best.speed => {}
                _ => {
                    wind_max = Some(DatedWindExtremum {
                        speed: w.speed,
                        direction: w.direction.clone(),
                        station: w.station.clone(),
                        date: day.date,
                    })
                }
            }
        }

        merge_stations(&mut thunder_stations, &day.thunder_stations);
        merge_stations(&mut strong_wind_stations, &day.strong_wind_stations);
        merge_stations(&mut stations, &day.stations);
    }

    Some(PeriodSummary {
        from: first.date,
        to: last.date,
        temp_min,
        temp_max,
        humidity_min,
        rain_max,
        wind_max,
        thunder_stations,
        strong_wind_stations,
        total_days: days.len(),
        stations,
    })
}

// ---------------------------------------------------------------------------
// Group reduction (raw records → group summary)
// ---------------------------------------------------------------------------

fn fold_min(acc: &mut Option<Extremum>, value: Option<f64>, station: &str) {
    if let Some(v) = value {
        match acc {
            Some(best) if v >= best.value => {}
            _ => {
                *acc = Some(Extremum {
                    value: v,
                    station: station.to_string(),
                })
            }
        }
    }
}

fn fold_max(acc: &mut Option<Extremum>, value: Option<f64>, station: &str) {
    if let Some(v) = value {
        match acc {
            Some(best) if v <= best.value => {}
            _ => {
                *acc = Some(Extremum {
                    value: v,
                    station: station.to_string(),
                })
            }
        }
    }
}

/// Reduces every record of one station-group across the whole period in a
/// single pass. The rainfall total sums each present daily accumulation —
/// a recorded 0 contributes, an absent reading does not.
pub fn summarize_group(
    group: &str,
    records: &[ObservationRecord],
    config: &AnalysisConfig,
) -> Option<GroupSummary> {
    if records.is_empty() {
        return None;
    }

    let mut temp_min: Option<Extremum> = None;
    let mut temp_max: Option<Extremum> = None;
    let mut humidity_min: Option<Extremum> = None;
    let mut rain_max: Option<Extremum> = None;
    let mut rain_total = 0.0;
    let mut wind_max: Option<WindExtremum> = None;
    let mut thunder_stations: Vec<String> = Vec::new();
    let mut strong_wind_stations: Vec<String> = Vec::new();
    let mut stations: Vec<String> = Vec::new();

    for rec in records {
        fold_min(&mut temp_min, rec.temp_min, &rec.station);
        fold_max(&mut temp_max, rec.temp_max, &rec.station);
        fold_min(
            &mut humidity_min,
            rec.humidity_min.filter(|&v| v > 0.0),
            &rec.station,
        );
        fold_max(&mut rain_max, rec.rain_24h, &rec.station);
        if let Some(r) = rec.rain_24h {
            rain_total += r;
        }

        if let Some(wind) = extract_max_wind(rec) {
            match &wind_max {
                Some(best) if wind.speed <= best.speed => {}
                _ => {
                    wind_max = Some(WindExtremum {
                        speed: wind.speed,
                        direction: wind.direction.clone(),
                        station: rec.station.clone(),
                    })
                }
            }
        }

        if has_thunder(rec) && !thunder_stations.contains(&rec.station) {
            thunder_stations.push(rec.station.clone());
        }
        if has_strong_wind(rec, config) && !strong_wind_stations.contains(&rec.station) {
            strong_wind_stations.push(rec.station.clone());
        }
        if !stations.contains(&rec.station) {
            stations.push(rec.station.clone());
        }
    }

    Some(GroupSummary {
        group: group.to_string(),
        temp_min,
        temp_max,
        humidity_min,
        rain_max,
        rain_total: round1(rain_total),
        wind_max,
        thunder_stations,
        strong_wind_stations,
        station_count: stations.len(),
    })
}

/// Partitions a record batch by group label and reduces each partition.
/// Records with no group label are skipped. Output follows the order in
/// which groups first appear in the batch.
pub fn summarize_groups(
    records: &[ObservationRecord],
    config: &AnalysisConfig,
) -> Vec<GroupSummary> {
    let mut order: Vec<String> = Vec::new();
    for rec in records {
        if let Some(g) = &rec.group {
            if !order.contains(g) {
                order.push(g.clone());
            }
        }
    }
    order
        .iter()
        .filter_map(|g| {
            let members: Vec<ObservationRecord> = records
                .iter()
                .filter(|r| r.group.as_deref() == Some(g.as_str()))
                .cloned()
                .collect();
            summarize_group(g, &members, config)
        })
        .collect()
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

    fn day(date: &str) -> DailySummary {
        DailySummary {
            date: d(date),
            temp_min: None,
            temp_max: None,
            humidity_min: None,
            rain_max: None,
            wind_max: None,
            thunder_stations: Vec::new(),
            strong_wind_stations: Vec::new(),
            stations: Vec::new(),
        }
    }

    fn extremum(value: f64, station: &str) -> Option<Extremum> {
        Some(Extremum {
            value,
            station: station.to_string(),
        })
    }

    #[test]
    fn test_period_extremum_carries_occurrence_date() {
        let mut d1 = day("2024-05-01");
        d1.temp_max = extremum(35.0, "A");
        let mut d2 = day("2024-05-02");
        d2.temp_max = extremum(37.5, "B");
        let mut d3 = day("2024-05-03");
        d3.temp_max = extremum(36.0, "A");

        let period = summarize_period(&[d1, d2, d3]).unwrap();
        let max = period.temp_max.unwrap();
        assert_eq!(max.value, 37.5);
        assert_eq!(max.station, "B");
        assert_eq!(max.date, d("2024-05-02"));
        assert_eq!(period.total_days, 3);
        assert_eq!(period.from, d("2024-05-01"));
        assert_eq!(period.to, d("2024-05-03"));
    }

    #[test]
    fn test_period_tie_keeps_earlier_day() {
        let mut d1 = day("2024-05-01");
        d1.rain_max = extremum(40.0, "A");
        let mut d2 = day("2024-05-02");
        d2.rain_max = extremum(40.0, "B");

        let period = summarize_period(&[d1, d2]).unwrap();
        let max = period.rain_max.unwrap();
        assert_eq!(max.station, "A");
        assert_eq!(max.date, d("2024-05-01"));
    }

    #[test]
    fn test_period_unions_station_sets() {
        let mut d1 = day("2024-05-01");
        d1.thunder_stations = vec!["A".into(), "B".into()];
        d1.stations = vec!["A".into(), "B".into()];
        let mut d2 = day("2024-05-02");
        d2.thunder_stations = vec!["B".into(), "C".into()];
        d2.stations = vec!["B".into(), "C".into()];

        let period = summarize_period(&[d1, d2]).unwrap();
        assert_eq!(period.thunder_stations, vec!["A", "B", "C"]);
        assert_eq!(period.station_count(), 3);
    }

    #[test]
    fn test_empty_period_yields_no_summary() {
        assert!(summarize_period(&[]).is_none());
    }

    #[test]
    fn test_group_rain_total_counts_present_zeros_only() {
        let mut a1 = base_record("A", "2024-05-01");
        a1.group = Some("Nam Bo".into());
        a1.rain_24h = Some(0.0);
        let mut b1 = base_record("B", "2024-05-01");
        b1.group = Some("Nam Bo".into());
        b1.rain_24h = None;
        let mut a2 = base_record("A", "2024-05-02");
        a2.group = Some("Nam Bo".into());
        a2.rain_24h = Some(12.4);

        let groups = summarize_groups(&[a1, b1, a2], &AnalysisConfig::default());
        assert_eq!(groups.len(), 1);
        let g = &groups[0];
        assert_eq!(g.group, "Nam Bo");
        assert_eq!(g.rain_total, 12.4);
        assert_eq!(g.rain_max.as_ref().unwrap().value, 12.4);
        assert_eq!(g.station_count, 2);
    }

    #[test]
    fn test_groups_partitioned_in_first_seen_order() {
        let mut a = base_record("A", "2024-05-01");
        a.group = Some("Trung Bo".into());
        let mut b = base_record("B", "2024-05-01");
        b.group = Some("Nam Bo".into());
        let c = base_record("C", "2024-05-01"); // no group label

        let groups = summarize_groups(&[a, b, c], &AnalysisConfig::default());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, "Trung Bo");
        assert_eq!(groups[1].group, "Nam Bo");
    }
}
