/// Dominant-wind extraction for one observation record.
///
/// A record carries up to eight regular 3-hourly wind observations and up
/// to four gust ("max wind") observations. Both kinds compete in a single
/// pool: the extractor walks the regular hours in report order, then the
/// gust hours, keeping the highest speed seen and the direction paired with
/// it. The comparison is strict `>`, so the first-seen maximum wins ties —
/// the same stability rule the aggregators use for every other factor.

use crate::model::{ObservationRecord, WindObs};

/// Resolved dominant wind: maximum speed with its paired direction.
#[derive(Debug, Clone, PartialEq)]
pub struct WindInfo {
    pub speed: f64,
    pub direction: Option<String>,
}

/// Scans all wind observations in the record and returns the maximum speed
/// with its paired direction, or `None` when no hour has a numeric speed.
/// A recorded speed of 0 is still wind data and still competes.
pub fn extract_max_wind(record: &ObservationRecord) -> Option<WindInfo> {
    let mut best: Option<&WindObs> = None;

    for obs in record.wind.iter().chain(record.gusts.iter()).flatten() {
        match best {
            Some(b) if obs.speed <= b.speed => {}
            _ => best = Some(obs),
        }
    }

    best.map(|b| WindInfo {
        speed: b.speed,
        direction: b.direction.clone(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
