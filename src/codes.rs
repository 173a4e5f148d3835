/// Synoptic code translation tables.
///
/// Three pure lookups used by the detail tables:
/// - present-weather (WW) codes → phenomenon labels;
/// - past-weather (W1/W2) codes → phenomenon labels, a disjoint dictionary
///   covering codes 0–9 only;
/// - wave-height codes → discretized height in meters (fixed table, not a
///   formula).
///
/// Unknown codes pass through as their literal string form rather than
/// erroring: new codes show up in the feed before anyone updates these
/// tables, and the reports should display them verbatim instead of failing.
/// Absent input maps to the `NO_VALUE` placeholder.

/// Placeholder rendered for an absent code.
pub const NO_VALUE: &str = "-";

/// Present-weather (WW) code dictionary.
const PRESENT_WEATHER: &[(i64, &str)] = &[
    (0, "Clear"),
    (1, "Partly cloudy"),
    (2, "Cloudy"),
    (3, "Partly cloudy"),
    (4, "Smoke"),
    (5, "Dry haze"),
    (6, "Dust"),
    (10, "Light mist"),
    (13, "Lightning"),
    (14, "Distant rain"),
    (17, "Thunderstorm"),
    (18, "Squall"),
    (19, "Funnel cloud"),
    (20, "Drizzle"),
    (21, "Rain"),
    (25, "Rain shower"),
    (28, "Fog"),
    (29, "Thunderstorm"),
    (42, "Fog"),
    (43, "Fog"),
    (44, "Fog"),
    (45, "Fog"),
    (46, "Fog"),
    (47, "Fog"),
    (60, "Light rain"),
    (61, "Moderate rain"),
    (63, "Heavy rain"),
    (65, "Intense rain"),
    (66, "Intense rain"),
    (80, "Rain shower"),
    (81, "Rain shower"),
    (82, "Rain shower"),
    (91, "Thunderstorm"),
    (95, "Thunderstorm"),
];

/// Past-weather (W1/W2) code dictionary. Codes 0–9 only; the code space is
/// disjoint from the present-weather table.
const PAST_WEATHER: &[(i64, &str)] = &[
    (0, "Mostly clear"),
    (1, "Partly cloudy"),
    (2, "Overcast"),
    (3, "Dust storm"),
    (4, "Fog"),
    (5, "Drizzle"),
    (6, "Rain"),
    (7, "Snow"),
    (8, "Rain shower"),
    (9, "Thunderstorm"),
];

/// Wave-height code → discretized height in meters. Convention table, not
/// a formula: each code maps to the midpoint of its half-meter band.
const WAVE_HEIGHT: &[(i64, &str)] = &[
    (0, "0.25"),
    (1, "0.75"),
    (2, "1.25"),
    (3, "1.75"),
    (4, "2.25"),
    (5, "2.75"),
    (6, "3.25"),
    (7, "3.75"),
    (8, "4.25"),
    (9, "4.75"),
];

fn lookup(table: &'static [(i64, &'static str)], code: i64) -> Option<&'static str> {
    table.iter().find(|&&(c, _)| c == code).map(|&(_, label)| label)
}

fn translate(table: &'static [(i64, &'static str)], code: Option<i64>) -> String {
    match code {
        None => NO_VALUE.to_string(),
        Some(c) => lookup(table, c)
            .map(str::to_string)
            .unwrap_or_else(|| c.to_string()),
    }
}

/// Translates a present-weather (WW) code to its phenomenon label.
pub fn present_weather_label(code: Option<i64>) -> String {
    translate(PRESENT_WEATHER, code)
}

/// Translates a past-weather (W1/W2) code to its phenomenon label.
pub fn past_weather_label(code: Option<i64>) -> String {
    translate(PAST_WEATHER, code)
}

/// Translates a wave-height code to its discretized height in meters.
pub fn wave_height_label(code: Option<i64>) -> String {
    translate(WAVE_HEIGHT, code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
