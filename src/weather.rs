/// Weather-event classification: thunder and strong-wind predicates.
///
/// Thunder detection checks the present-weather code at every regular
/// observation hour against the thunder-class code set used by the
/// reporting side: the enumerated codes {17, 29, 95, 96, 97} plus two
/// inclusive ranges, 13–19 and 91–99. The ranges are carried over from the
/// upstream data convention as-is — 18 (squall) and 19 (funnel cloud) sit
/// inside the 13–19 range despite being distinct phenomena, which is a
/// data-quality question for the code table's owners, not something to
/// silently "correct" here.

use crate::config::AnalysisConfig;
use crate::model::ObservationRecord;
use crate::wind::extract_max_wind;

/// Enumerated thunder-class codes outside the two ranges.
const THUNDER_CODES: [i64; 5] = [17, 29, 95, 96, 97];

/// Inclusive code ranges treated as thunderstorm variants.
const THUNDER_RANGES: [(i64, i64); 2] = [(13, 19), (91, 99)];

/// True when the code denotes a thunder-class phenomenon.
pub fn is_thunder_code(code: i64) -> bool {
    THUNDER_CODES.contains(&code)
        || THUNDER_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
}

/// True when any observation hour of the record carries a thunder-class
/// present-weather code.
pub fn has_thunder(record: &ObservationRecord) -> bool {
    record.weather_codes.iter().flatten().any(|&c| is_thunder_code(c))
}

/// True when the record's dominant wind reaches the strong-wind threshold
/// (inclusive). A record with no wind data is never strong-wind.
pub fn has_strong_wind(record: &ObservationRecord, config: &AnalysisConfig) -> bool {
    extract_max_wind(record)
        .map(|w| w.speed >= config.strong_wind_threshold)
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
