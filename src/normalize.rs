/// Record normalization: raw store rows → canonical `ObservationRecord`.
///
/// Depending on which underlying table answered the query, the store returns
/// the same semantic column under either its canonical mixed-case name
/// (`NhietTx`) or an all-lowercase fallback (`nhiettx`). Nothing past this
/// module ever sees a raw map: the normalizer reconciles the casing
/// (canonical wins when both are present), coerces every value through
/// `parse`, and computes the derived fields the reports rely on:
///
/// - humidity minimum: min across per-hour readings when any are present,
///   else the explicitly stored minimum, else unset;
/// - half-day rainfall buckets (night 19→07, day 07→19): sum of the two
///   contributing accumulations, missing contributor as 0 only when the
///   other is present.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::model::{ObservationRecord, WindObs, GUST_HOURS, OBS_HOURS, RAIN_HOURS};
use crate::parse::{coerce_code, coerce_number, coerce_string, round1};

/// Looks up a semantic field by its canonical key, falling back to the
/// all-lowercase spelling. A canonical key that is present but null is
/// treated as absent, so the lowercase key still gets a chance.
fn raw_field<'a>(row: &'a Map<String, Value>, canonical: &str) -> Option<&'a Value> {
    row.get(canonical)
        .filter(|v| !v.is_null())
        .or_else(|| row.get(canonical.to_lowercase().as_str()))
}

fn number_field(row: &Map<String, Value>, canonical: &str) -> Option<f64> {
    raw_field(row, canonical).and_then(coerce_number)
}

fn code_field(row: &Map<String, Value>, canonical: &str) -> Option<i64> {
    raw_field(row, canonical).and_then(coerce_code)
}

fn string_field(row: &Map<String, Value>, canonical: &str) -> Option<String> {
    raw_field(row, canonical).and_then(coerce_string)
}

/// Sums two optional readings with missing-as-zero semantics, but only when
/// at least one is present. Used for the half-day rain buckets.
fn partial_sum(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(round1(a.unwrap_or(0.0) + b.unwrap_or(0.0))),
    }
}

/// Normalizes one raw store row into a canonical record.
///
/// Returns `None` when the row carries no usable identity — a missing or
/// empty station name, or a date that does not parse as `YYYY-MM-DD`.
/// Everything else degrades field-by-field to "no observation".
pub fn normalize(row: &Map<String, Value>) -> Option<ObservationRecord> {
    let station = string_field(row, "Tram")?;
    let date_str = string_field(row, "Ngay")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").ok()?;

    let humidity_hours: [Option<f64>; 8] =
        OBS_HOURS.map(|h| number_field(row, &format!("U{h}")));

    // Minimum over per-hour readings when any are present; the stored
    // minimum column is only trusted when no hourly data exists.
    let hourly_min = humidity_hours
        .iter()
        .flatten()
        .copied()
        .fold(None::<f64>, |acc, v| {
            Some(acc.map_or(v, |m| if v < m { v } else { m }))
        });
    let humidity_min = hourly_min.or_else(|| number_field(row, "Umin"));

    let rain_hours: [Option<f64>; 4] =
        RAIN_HOURS.map(|h| number_field(row, &format!("R{h}")));
    let rain_night = partial_sum(rain_hours[0], rain_hours[1]);
    let rain_day = partial_sum(rain_hours[2], rain_hours[3]);

    let wind: [Option<WindObs>; 8] = OBS_HOURS.map(|h| {
        number_field(row, &format!("ff{h}")).map(|speed| WindObs {
            speed,
            direction: string_field(row, &format!("dd{h}")),
        })
    });
    let gusts: [Option<WindObs>; 4] = GUST_HOURS.map(|h| {
        number_field(row, &format!("Fmax{h}")).map(|speed| WindObs {
            speed,
            direction: string_field(row, &format!("Dmax{h}")),
        })
    });

    Some(ObservationRecord {
        station,
        group: string_field(row, "Dai"),
        station_code: string_field(row, "MaTram"),
        date,
        temp_avg: number_field(row, "NhietTB"),
        temp_max: number_field(row, "NhietTx"),
        temp_min: number_field(row, "NhietTn"),
        humidity_avg: number_field(row, "AmTB"),
        humidity_min,
        humidity_hours,
        rain_hours,
        rain_24h: number_field(row, "Mua24h"),
        rain_night,
        rain_day,
        wind,
        gusts,
        weather_codes: OBS_HOURS.map(|h| code_field(row, &format!("W{h}"))),
        water_temp: RAIN_HOURS.map(|h| number_field(row, &format!("Tnuoc{h}"))),
        wave_codes: RAIN_HOURS.map(|h| code_field(row, &format!("Hsong{h}"))),
    })
}

/// Normalizes a batch of raw rows, dropping rows with no usable identity.
pub fn normalize_batch(rows: &[Map<String, Value>]) -> Vec<ObservationRecord> {
    rows.iter().filter_map(normalize).collect()
}

/// Renders a canonical record back into a flat map under canonical keys.
///
/// This is the record's spreadsheet-export shape, and the inverse of
/// `normalize`: `normalize(&to_raw(&r))` reproduces `r` exactly. Absent
/// fields are omitted rather than written as null.
pub fn to_raw(record: &ObservationRecord) -> Map<String, Value> {
    let mut row = Map::new();
    let put_num = |row: &mut Map<String, Value>, key: &str, v: Option<f64>| {
        if let Some(v) = v {
            if let Some(n) = serde_json::Number::from_f64(v) {
                row.insert(key.to_string(), Value::Number(n));
            }
        }
    };

    row.insert("Tram".into(), Value::String(record.station.clone()));
    if let Some(g) = &record.group {
        row.insert("Dai".into(), Value::String(g.clone()));
    }
    if let Some(c) = &record.station_code {
        row.insert("MaTram".into(), Value::String(c.clone()));
    }
    row.insert("Ngay".into(), Value::String(record.date.format("%Y-%m-%d").to_string()));

    put_num(&mut row, "NhietTB", record.temp_avg);
    put_num(&mut row, "NhietTx", record.temp_max);
    put_num(&mut row, "NhietTn", record.temp_min);
    put_num(&mut row, "AmTB", record.humidity_avg);
    put_num(&mut row, "Umin", record.humidity_min);
    put_num(&mut row, "Mua24h", record.rain_24h);
    put_num(&mut row, "R19_7", record.rain_night);
    put_num(&mut row, "R7_19", record.rain_day);

    for (i, h) in OBS_HOURS.iter().enumerate() {
        put_num(&mut row, &format!("U{h}"), record.humidity_hours[i]);
        if let Some(w) = &record.wind[i] {
            put_num(&mut row, &format!("ff{h}"), Some(w.speed));
            if let Some(d) = &w.direction {
                row.insert(format!("dd{h}"), Value::String(d.clone()));
            }
        }
        if let Some(code) = record.weather_codes[i] {
            row.insert(format!("W{h}"), Value::Number(code.into()));
        }
    }
    for (i, h) in GUST_HOURS.iter().enumerate() {
        if let Some(w) = &record.gusts[i] {
            put_num(&mut row, &format!("Fmax{h}"), Some(w.speed));
            if let Some(d) = &w.direction {
                row.insert(format!("Dmax{h}"), Value::String(d.clone()));
            }
        }
    }
    for (i, h) in RAIN_HOURS.iter().enumerate() {
        put_num(&mut row, &format!("R{h}"), record.rain_hours[i]);
        put_num(&mut row, &format!("Tnuoc{h}"), record.water_temp[i]);
        if let Some(code) = record.wave_codes[i] {
            row.insert(format!("Hsong{h}"), Value::Number(code.into()));
        }
    }

    row
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
