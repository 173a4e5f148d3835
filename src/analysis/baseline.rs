/// Comparison of observed period values against long-term (TBNN) averages.
///
/// The comparators are stateless: one call per station per reporting
/// period. A missing baseline yields a missing comparison, and a rainfall
/// baseline of zero is treated the same as absent — the deviation is a
/// ratio and a zero reference makes it meaningless, not infinite.

use crate::model::BaselineRecord;
use crate::parse::round1;

/// Finds the baseline entry for one station and calendar month.
pub fn monthly<'a>(
    baselines: &'a [BaselineRecord],
    station: &str,
    month: u32,
) -> Option<&'a BaselineRecord> {
    baselines
        .iter()
        .find(|b| b.station == station && b.month == month)
}

/// Observed mean temperature minus the baseline, one decimal. Missing on
/// either side yields `None`.
pub fn temp_anomaly(observed: Option<f64>, baseline: Option<f64>) -> Option<f64> {
    match (observed, baseline) {
        (Some(obs), Some(base)) => Some(round1(obs - base)),
        _ => None,
    }
}

/// Rainfall deviation from the baseline in percent, one decimal. Defined
/// only for a strictly positive baseline.
pub fn rain_deviation_pct(observed_total: f64, baseline: Option<f64>) -> Option<f64> {
    match baseline {
        Some(base) if base > 0.0 => Some(round1((observed_total - base) / base * 100.0)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
