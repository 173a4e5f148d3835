/// Narrative generation: a period summary rendered as report prose.
///
/// Deterministic template text — every sentence is driven by a threshold
/// comparison against the analysis configuration, so two identical
/// summaries always produce identical narratives. Paragraph order is
/// fixed: overview, temperature, humidity, rainfall, wind, phenomena,
/// closing assessment.

use crate::config::AnalysisConfig;
use crate::model::PeriodSummary;

fn join_stations(stations: &[String]) -> String {
    stations.join(", ")
}

fn date_range(summary: &PeriodSummary) -> String {
    if summary.from == summary.to {
        format!("{}", summary.from.format("%d/%m/%Y"))
    } else {
        format!(
            "{} to {}",
            summary.from.format("%d/%m/%Y"),
            summary.to.format("%d/%m/%Y")
        )
    }
}

/// Renders the full report narrative for one period summary.
pub fn render_narrative(summary: &PeriodSummary, config: &AnalysisConfig) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    paragraphs.push(format!(
        "Synthesis report for {}, covering {} day(s) of observations from {} station(s).",
        date_range(summary),
        summary.total_days,
        summary.station_count()
    ));

    // Temperature
    if let Some(max) = &summary.temp_max {
        let mut p = if max.value >= config.severe_heat_threshold {
            format!(
                "Severe heat was recorded: the highest temperature reached {:.1}°C at {} on {}.",
                max.value,
                max.station,
                max.date.format("%d/%m")
            )
        } else if max.value >= config.heat_threshold {
            format!(
                "Hot weather occurred, with a maximum temperature of {:.1}°C at {} on {}.",
                max.value,
                max.station,
                max.date.format("%d/%m")
            )
        } else {
            format!(
                "Temperatures stayed moderate; the maximum was {:.1}°C at {} on {}.",
                max.value,
                max.station,
                max.date.format("%d/%m")
            )
        };
        if let Some(min) = &summary.temp_min {
            p.push_str(&format!(
                " The lowest temperature was {:.1}°C at {} on {}.",
                min.value,
                min.station,
                min.date.format("%d/%m")
            ));
        }
        paragraphs.push(p);
    }

    // Humidity — a non-positive minimum is an instrument artifact and is
    // already screened out upstream, so any present value is reportable.
    if let Some(min) = &summary.humidity_min {
        let p = if min.value < 30.0 {
            format!(
                "Air was exceptionally dry: relative humidity fell to {:.0}% at {} on {}.",
                min.value,
                min.station,
                min.date.format("%d/%m")
            )
        } else if min.value < 50.0 {
            format!(
                "Dry conditions were observed, with relative humidity down to {:.0}% at {} on {}.",
                min.value,
                min.station,
                min.date.format("%d/%m")
            )
        } else {
            format!(
                "Humidity remained comfortable; the lowest relative humidity was {:.0}% at {}.",
                min.value, min.station
            )
        };
        paragraphs.push(p);
    }

    // Rainfall
    match &summary.rain_max {
        Some(max) if max.value > 0.0 => {
            let p = if max.value >= config.very_heavy_rain_threshold {
                format!(
                    "Very heavy rain fell in the period: the largest daily total was {:.1} mm at {} on {}.",
                    max.value,
                    max.station,
                    max.date.format("%d/%m")
                )
            } else if max.value >= config.heavy_rain_threshold {
                format!(
                    "Heavy rain occurred, peaking at {:.1} mm in 24 hours at {} on {}.",
                    max.value,
                    max.station,
                    max.date.format("%d/%m")
                )
            } else if max.value >= config.moderate_rain_threshold {
                format!(
                    "Moderate rain was recorded; the largest daily total was {:.1} mm at {} on {}.",
                    max.value,
                    max.station,
                    max.date.format("%d/%m")
                )
            } else {
                format!(
                    "Only light rain was recorded, at most {:.1} mm in a day at {}.",
                    max.value, max.station
                )
            };
            paragraphs.push(p);
        }
        Some(_) => {
            paragraphs.push("No significant rainfall was recorded in the period.".to_string());
        }
        None => {}
    }

    // Wind — the gale wording takes precedence when both thresholds are met.
    if let Some(max) = &summary.wind_max {
        if max.speed > 0.0 {
            let direction = max.direction.as_deref().unwrap_or("variable direction");
            let p = if max.speed >= config.gale_threshold {
                format!(
                    "Gale-force wind was observed: {:.0} m/s ({}) at {} on {}.",
                    max.speed,
                    direction,
                    max.station,
                    max.date.format("%d/%m")
                )
            } else if max.speed >= config.strong_wind_threshold {
                format!(
                    "Strong wind reached {:.0} m/s ({}) at {} on {}.",
                    max.speed,
                    direction,
                    max.station,
                    max.date.format("%d/%m")
                )
            } else {
                format!(
                    "Winds stayed light, peaking at {:.0} m/s at {}.",
                    max.speed, max.station
                )
            };
            paragraphs.push(p);
        }
    }

    // Phenomena
    if !summary.thunder_stations.is_empty() {
        paragraphs.push(format!(
            "Thunderstorms were observed at: {}.",
            join_stations(&summary.thunder_stations)
        ));
    }
    if !summary.strong_wind_stations.is_empty() {
        paragraphs.push(format!(
            "Strong wind was recorded at: {}.",
            join_stations(&summary.strong_wind_stations)
        ));
    }

    paragraphs.push(assessment(summary, config));
    paragraphs.join("\n\n")
}

/// Closing one-line assessment. The first matching condition wins, checked
/// from most to least hazardous.
fn assessment(summary: &PeriodSummary, config: &AnalysisConfig) -> String {
    let temp_max = summary.temp_max.as_ref().map(|e| e.value);
    let rain_max = summary.rain_max.as_ref().map(|e| e.value);
    let wind_max = summary.wind_max.as_ref().map(|e| e.speed);

    if temp_max.is_some_and(|t| t > config.heat_threshold)
        && rain_max.is_none_or(|r| r <= 0.0)
    {
        "Assessment: hot and dry conditions — elevated risk of drought and wildfire.".to_string()
    } else if rain_max.is_some_and(|r| r >= config.heavy_rain_threshold) {
        "Assessment: heavy rainfall — watch for localized flooding and high river stages."
            .to_string()
    } else if wind_max.is_some_and(|w| w >= config.gale_threshold) {
        "Assessment: damaging wind occurred — exposed and coastal areas should remain alert."
            .to_string()
    } else if summary.thunder_stations.len() > 3 {
        "Assessment: widespread thunderstorm activity across the network.".to_string()
    } else {
        "Assessment: generally favorable weather conditions over the period.".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
