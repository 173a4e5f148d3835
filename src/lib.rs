/// kttv_analytics: synthesis engine for hydro-meteorological station reports.
///
/// # Module structure
///
/// ```text
/// kttv_analytics
/// ├── model       — shared data types (ObservationRecord, summaries, forecasts)
/// ├── parse       — locale-tolerant numeric/code coercion for raw store values
/// ├── normalize   — raw store rows → canonical records (either key casing)
/// ├── wind        — maximum-wind extraction over regular + gust hours
/// ├── weather     — thunder code classification and strong-wind detection
/// ├── codes       — present/past weather and wave-height code translation
/// ├── stations    — batch-derived station metadata + marine station registry
/// ├── config      — analysis thresholds and forecast tuning (analysis.toml)
/// ├── timespan    — reporting spans and baseline period keys
/// ├── analysis
/// │   ├── daily    — one calendar day of records → daily summary
/// │   ├── period   — daily summaries → period summary; per-group reduction
/// │   ├── station  — per-station period characteristics and day deltas
/// │   └── baseline — comparison against long-term (TBNN) averages
/// ├── forecast    — anomaly-persistence temperature and rainfall projection
/// └── narrative   — period summary → report prose
/// ```

/// Public modules
pub mod analysis;
pub mod codes;
pub mod config;
pub mod forecast;
pub mod model;
pub mod narrative;
pub mod normalize;
pub mod parse;
pub mod stations;
pub mod timespan;
pub mod weather;
pub mod wind;

#[cfg(test)]
pub(crate) mod fixtures;
