/// Shared data types for the station synthesis engine.
///
/// The canonical `ObservationRecord` is the only shape allowed past the
/// normalization boundary — the raw store rows (inconsistent key casing,
/// string-or-number values) never reach the aggregation code. Everything
/// derived from records (daily, period, group, and per-station summaries,
/// forecast points) lives here too, as plain serializable data with no
/// handles back to the store.

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Observation hours
// ---------------------------------------------------------------------------

/// Regular synoptic observation hours, in report order. Wind, humidity,
/// and present-weather codes are recorded at each of these.
pub const OBS_HOURS: [&str; 8] = ["1h", "4h", "7h", "10h", "13h", "16h", "19h", "22h"];

/// Hours carrying gust ("max wind") observations. These share the wind
/// extractor's comparison pool with the regular hours.
pub const GUST_HOURS: [&str; 4] = ["1h", "7h", "13h", "19h"];

/// Hours carrying rainfall accumulations (6-hourly buckets ending at the
/// named hour) and the marine water/wave observations.
pub const RAIN_HOURS: [&str; 4] = ["1h", "7h", "13h", "19h"];

// ---------------------------------------------------------------------------
// Canonical observation record
// ---------------------------------------------------------------------------

/// One wind observation: speed in m/s plus the compass direction label
/// recorded alongside it. Direction may be missing even when speed is not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindObs {
    pub speed: f64,
    pub direction: Option<String>,
}

/// Canonical per-station, per-day observation record.
///
/// Every numeric field is `Option` — absent means "no observation", and the
/// normalizer guarantees coercion failures land here as `None`, never as 0.
/// Hour-indexed arrays follow `OBS_HOURS` / `GUST_HOURS` / `RAIN_HOURS`
/// ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationRecord {
    pub station: String,
    /// Administrative station-group ("Đài") this station reports under.
    pub group: Option<String>,
    pub station_code: Option<String>,
    pub date: NaiveDate,

    // Temperature (°C)
    pub temp_avg: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,

    // Humidity (%)
    pub humidity_avg: Option<f64>,
    /// Daily humidity minimum. Derived by the normalizer from the per-hour
    /// readings when any are present, else taken from the explicit field.
    pub humidity_min: Option<f64>,
    pub humidity_hours: [Option<f64>; 8],

    // Rainfall (mm)
    pub rain_hours: [Option<f64>; 4],
    pub rain_24h: Option<f64>,
    /// 19:00→07:00 bucket, derived from the 01h + 07h accumulations.
    pub rain_night: Option<f64>,
    /// 07:00→19:00 bucket, derived from the 13h + 19h accumulations.
    pub rain_day: Option<f64>,

    // Wind
    pub wind: [Option<WindObs>; 8],
    pub gusts: [Option<WindObs>; 4],

    // Present-weather codes at each regular hour
    pub weather_codes: [Option<i64>; 8],

    // Marine observations (coastal stations only)
    pub water_temp: [Option<f64>; 4],
    pub wave_codes: [Option<i64>; 4],
}

// ---------------------------------------------------------------------------
// Derived aggregates
// ---------------------------------------------------------------------------

/// A winning extremum with the station that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub value: f64,
    pub station: String,
}

/// A winning extremum with station attribution and the date it occurred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedExtremum {
    pub value: f64,
    pub station: String,
    pub date: NaiveDate,
}

/// Maximum wind over a day or period: speed, paired direction, attribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindExtremum {
    pub speed: f64,
    pub direction: Option<String>,
    pub station: String,
}

/// Reduction of all records sharing one calendar day.
///
/// Fields are `None` when no record contributed data for that factor — the
/// ±∞ accumulator sentinels never leak into the output. A day with zero
/// records produces no `DailySummary` at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temp_min: Option<Extremum>,
    pub temp_max: Option<Extremum>,
    pub humidity_min: Option<Extremum>,
    pub rain_max: Option<Extremum>,
    pub wind_max: Option<WindExtremum>,
    /// Stations with a thunder-class present-weather code, first-seen order.
    pub thunder_stations: Vec<String>,
    /// Stations whose extracted wind reached the strong-wind threshold.
    pub strong_wind_stations: Vec<String>,
    /// Distinct stations contributing to this day, first-seen order.
    pub stations: Vec<String>,
}

impl DailySummary {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

/// Maximum-wind extremum carrying its occurrence date (period scope).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedWindExtremum {
    pub speed: f64,
    pub direction: Option<String>,
    pub station: String,
    pub date: NaiveDate,
}

/// Temporal reduction of a sequence of daily summaries: extremum-of-extrema
/// with occurrence dates, plus thunder/strong-wind station sets unioned
/// across the whole period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub temp_min: Option<DatedExtremum>,
    pub temp_max: Option<DatedExtremum>,
    pub humidity_min: Option<DatedExtremum>,
    pub rain_max: Option<DatedExtremum>,
    pub wind_max: Option<DatedWindExtremum>,
    pub thunder_stations: Vec<String>,
    pub strong_wind_stations: Vec<String>,
    pub total_days: usize,
    /// Distinct stations across the whole period.
    pub stations: Vec<String>,
}

impl PeriodSummary {
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

/// Whole-period reduction of one station-group's raw records, bypassing the
/// daily step. Adds a rainfall total on top of the usual extrema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group: String,
    pub temp_min: Option<Extremum>,
    pub temp_max: Option<Extremum>,
    pub humidity_min: Option<Extremum>,
    pub rain_max: Option<Extremum>,
    /// Sum of present daily rainfall values across all stations and days.
    /// A recorded 0 counts; an absent reading does not.
    pub rain_total: f64,
    pub wind_max: Option<WindExtremum>,
    pub thunder_stations: Vec<String>,
    pub strong_wind_stations: Vec<String>,
    pub station_count: usize,
}

/// Per-station period characteristics: means, extrema with dates, rainfall
/// totals, and the long-term-average comparison columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub station: String,
    pub temp_mean: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_max_date: Option<NaiveDate>,
    pub temp_min: Option<f64>,
    pub temp_min_date: Option<NaiveDate>,
    pub rain_total: f64,
    /// Days with rainfall strictly above zero.
    pub rain_days: usize,
    pub rain_max: Option<f64>,
    pub rain_max_date: Option<NaiveDate>,
    pub humidity_mean: Option<f64>,
    pub humidity_min: Option<f64>,
    pub humidity_min_date: Option<NaiveDate>,
    pub baseline_temp: Option<f64>,
    pub baseline_rain: Option<f64>,
    /// Observed mean temperature minus baseline, one decimal.
    pub temp_anomaly: Option<f64>,
    /// Rainfall deviation from baseline in percent, one decimal. `None`
    /// when the baseline is absent or non-positive.
    pub rain_deviation_pct: Option<f64>,
    pub has_data: bool,
}

// ---------------------------------------------------------------------------
// Baseline (long-term average) reference data
// ---------------------------------------------------------------------------

/// Long-term-average (TBNN) reference values for one station and calendar
/// month. Read-only input supplied by the external store; never derived or
/// mutated here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineRecord {
    pub station: String,
    /// Calendar month 1–12.
    pub month: u32,
    pub temp_avg: Option<f64>,
    pub rain_avg: Option<f64>,
}

// ---------------------------------------------------------------------------
// Forecast output
// ---------------------------------------------------------------------------

/// A synthetic future point produced by the anomaly-persistence forecaster.
/// Never persisted; `forecast` is always true and exists so the render
/// layer can distinguish projected points from observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub forecast: bool,
}
