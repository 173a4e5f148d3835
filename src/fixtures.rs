/// Test fixtures: canonical record builders shared by the unit tests.

use chrono::NaiveDate;

use crate::model::{ObservationRecord, WindObs};

/// A record with identity only; every observation field absent.
pub(crate) fn base_record(station: &str, date: &str) -> ObservationRecord {
    ObservationRecord {
        station: station.to_string(),
        group: None,
        station_code: None,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        temp_avg: None,
        temp_max: None,
        temp_min: None,
        humidity_avg: None,
        humidity_min: None,
        humidity_hours: Default::default(),
        rain_hours: Default::default(),
        rain_24h: None,
        rain_night: None,
        rain_day: None,
        wind: Default::default(),
        gusts: Default::default(),
        weather_codes: Default::default(),
        water_temp: Default::default(),
        wave_codes: Default::default(),
    }
}

/// A record carrying wind observations at the given hour indexes
/// (regular hours index into `OBS_HOURS`, gusts into `GUST_HOURS`).
pub(crate) fn record_with_wind(
    regular: &[(usize, f64, Option<&str>)],
    gusts: &[(usize, f64, Option<&str>)],
) -> ObservationRecord {
    let mut rec = base_record("A", "2024-05-01");
    for &(i, speed, dir) in regular {
        rec.wind[i] = Some(WindObs {
            speed,
            direction: dir.map(str::to_string),
        });
    }
    for &(i, speed, dir) in gusts {
        rec.gusts[i] = Some(WindObs {
            speed,
            direction: dir.map(str::to_string),
        });
    }
    rec
}

/// A record carrying present-weather codes at the given hour indexes.
pub(crate) fn record_with_weather_codes(codes: &[(usize, i64)]) -> ObservationRecord {
    let mut rec = base_record("A", "2024-05-01");
    for &(i, code) in codes {
        rec.weather_codes[i] = Some(code);
    }
    rec
}
