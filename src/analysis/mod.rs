/// Aggregation of canonical observation records into report summaries.
///
/// Submodules:
/// - `daily`    — reduces all records sharing one calendar day.
/// - `period`   — reduces daily summaries over a date range, and whole
///                record batches per station-group.
/// - `station`  — per-station period characteristics with day deltas.
/// - `baseline` — comparison of observed values against long-term averages.

pub mod baseline;
pub mod daily;
pub mod period;
pub mod station;
