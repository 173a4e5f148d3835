/// Daily aggregation: all records sharing one calendar day reduced to a
/// single summary with station attribution on every extremum.
///
/// Ties are broken by arrival order — the first record to reach an extreme
/// value keeps the attribution, later records must beat it strictly. A
/// recorded zero participates in the rainfall maximum (a dry day at one
/// station is still an observation); an absent reading never does.

use crate::config::AnalysisConfig;
use crate::model::{DailySummary, Extremum, ObservationRecord, WindExtremum};
use crate::weather::{has_strong_wind, has_thunder};
use crate::wind::extract_max_wind;

/// Folds a candidate into a running minimum, keeping the first station to
/// reach the winning value. Non-positive humidity readings are screened by
/// the caller, not here.
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

/// Reduces one day's records. Returns `None` for an empty batch — a day
/// with no records has no summary, not an all-null one.
pub fn summarize_day(
    records: &[ObservationRecord],
    config: &AnalysisConfig,
) -> Option<DailySummary> {
    let first = records.first()?;

    let mut temp_min: Option<Extremum> = None;
    let mut temp_max: Option<Extremum> = None;
    let mut humidity_min: Option<Extremum> = None;
    let mut rain_max: Option<Extremum> = None;
    let mut wind_max: Option<WindExtremum> = None;
    let mut thunder_stations: Vec<String> = Vec::new();
    let mut strong_wind_stations: Vec<String> = Vec::new();
    let mut stations: Vec<String> = Vec::new();

    for rec in records {
        fold_min(&mut temp_min, rec.temp_min, &rec.station);
        fold_max(&mut temp_max, rec.temp_max, &rec.station);
        // Zero humidity is an instrument artifact, not a reading.
        fold_min(
            &mut humidity_min,
            rec.humidity_min.filter(|&v| v > 0.0),
            &rec.station,
        );
        fold_max(&mut rain_max, rec.rain_24h, &rec.station);

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

    Some(DailySummary {
        date: first.date,
        temp_min,
        temp_max,
        humidity_min,
        rain_max,
        wind_max,
        thunder_stations,
        strong_wind_stations,
        stations,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
