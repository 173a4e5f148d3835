/// Analysis configuration loader - parses analysis.toml
///
/// Separates the domain thresholds and forecast tuning from code, making it
/// easy to adjust a threshold for one deployment region without recompiling.
/// Every field has a default carrying the operational constants, so a
/// partial file (or no file at all, via `AnalysisConfig::default()`) works.
///
/// Two wind constants intentionally coexist: the strong-wind station flag
/// fires at 16 m/s while the narrative's gale wording fires at 15 m/s.
/// They come from different upstream conventions and are kept independently
/// configurable rather than merged.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Thresholds and tuning for the synthesis and forecast engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Wind speed (m/s, inclusive) at which a station is flagged strong-wind.
    pub strong_wind_threshold: f64,
    /// Wind speed (m/s) at which the narrative reports gale conditions
    /// (Beaufort force 7 and above).
    pub gale_threshold: f64,

    /// Max temperature (°C) for "severe heat" narrative wording.
    pub severe_heat_threshold: f64,
    /// Max temperature (°C) for "hot" narrative wording.
    pub heat_threshold: f64,

    /// Daily rainfall (mm) classified as very heavy rain.
    pub very_heavy_rain_threshold: f64,
    /// Daily rainfall (mm) classified as heavy rain.
    pub heavy_rain_threshold: f64,
    /// Daily rainfall (mm) classified as moderate rain.
    pub moderate_rain_threshold: f64,

    /// Number of future days the forecaster projects.
    pub forecast_horizon_days: u32,
    /// Per-day decay of the temperature anomaly toward the monthly
    /// baseline. Must sit in (0, 1).
    pub temperature_decay: f64,
    /// Per-day decay of the rainfall trend factor toward neutral (1.0).
    pub rainfall_trend_decay: f64,
    /// Lower clamp on the rainfall trend factor.
    pub trend_factor_min: f64,
    /// Upper clamp on the rainfall trend factor.
    pub trend_factor_max: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strong_wind_threshold: 16.0,
            gale_threshold: 15.0,
            severe_heat_threshold: 37.0,
            heat_threshold: 35.0,
            very_heavy_rain_threshold: 100.0,
            heavy_rain_threshold: 50.0,
            moderate_rain_threshold: 16.0,
            forecast_horizon_days: 10,
            temperature_decay: 0.85,
            rainfall_trend_decay: 0.9,
            trend_factor_min: 0.5,
            trend_factor_max: 2.0,
        }
    }
}

/// Loads analysis configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let config: AnalysisConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Loads from the default location (`analysis.toml` in the working
/// directory, project root when running via `cargo`).
pub fn load_config_default() -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    load_config("analysis.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
