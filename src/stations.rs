/// Station metadata extraction and the marine-station registry.
///
/// Station identity flows in on every observation record rather than from a
/// configuration file, so the per-request station list is distilled from the
/// record batch itself. The marine registry is the one static piece: the
/// coastal synoptic stations whose water-temperature and wave observations
/// are meaningful.

use crate::model::ObservationRecord;

// ---------------------------------------------------------------------------
// Marine station registry
// ---------------------------------------------------------------------------

/// Synoptic codes of the coastal stations reporting marine observations
/// (sea water temperature, wave height codes). All other stations carry
/// those columns empty.
pub static MARINE_STATIONS: &[&str] = &["48889", "48918", "48916", "48917", "48919"];

/// Whether the given synoptic code belongs to a marine station.
pub fn is_marine_station(code: &str) -> bool {
    MARINE_STATIONS.contains(&code)
}

// ---------------------------------------------------------------------------
// Batch-derived station metadata
// ---------------------------------------------------------------------------

/// Name and group of one station as seen in a record batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMeta {
    pub station: String,
    pub group: Option<String>,
}

/// Distills the distinct stations present in a record batch, sorted by
/// station name. A station appearing in many records (one per day) yields
/// one entry; the first record seen supplies the group label.
pub fn station_list(records: &[ObservationRecord]) -> Vec<StationMeta> {
    let mut out: Vec<StationMeta> = Vec::new();
    for rec in records {
        if !out.iter().any(|m| m.station == rec.station) {
            out.push(StationMeta {
                station: rec.station.clone(),
                group: rec.group.clone(),
            });
        }
    }
    out.sort_by(|a, b| a.station.cmp(&b.station));
    out
}

/// Distinct group labels present in a record batch, sorted. Records with no
/// group label do not contribute.
pub fn group_list(records: &[ObservationRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for rec in records {
        if let Some(g) = &rec.group {
            if !out.iter().any(|existing| existing == g) {
                out.push(g.clone());
            }
        }
    }
    out.sort();
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::base_record;

    fn record(station: &str, group: Option<&str>, date: &str) -> ObservationRecord {
        let mut rec = base_record(station, date);
        rec.group = group.map(str::to_string);
        rec
    }

    #[test]
    fn test_station_list_dedupes_across_days() {
        let records = vec![
            record("Vung Tau", Some("Nam Bo"), "2024-05-01"),
            record("Ca Mau", Some("Nam Bo"), "2024-05-01"),
            record("Vung Tau", Some("Nam Bo"), "2024-05-02"),
        ];
        let list = station_list(&records);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].station, "Ca Mau");
        assert_eq!(list[1].station, "Vung Tau");
    }

    #[test]
    fn test_group_list_skips_unlabelled_records() {
        let records = vec![
            record("A", Some("Trung Bo"), "2024-05-01"),
            record("B", None, "2024-05-01"),
            record("C", Some("Nam Bo"), "2024-05-01"),
            record("D", Some("Trung Bo"), "2024-05-02"),
        ];
        assert_eq!(group_list(&records), vec!["Nam Bo", "Trung Bo"]);
    }

    #[test]
    fn test_marine_registry_membership() {
        assert!(is_marine_station("48917"));
        assert!(!is_marine_station("48887"));
    }
}
