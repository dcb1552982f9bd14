use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::numeric::normalize;

/// Join key column shared by both exports.
pub const VRID_COLUMN: &str = "VRID";
/// Carrier / shipment identifier column shown in detail views.
pub const ISA_COLUMN: &str = "ISA";
/// Placeholder shown when a record has no ISA or VRID value.
pub const NOT_AVAILABLE: &str = "N/A";

/// One data row from a CSV export, keyed by normalised column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Wrap an already-normalised column map.
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Build a record from `(column, value)` pairs, normalising column names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (normalize(k.as_ref()), v.into()))
            .collect();
        Self { fields }
    }

    /// Raw cell value for `column`, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Trimmed, upper-cased cell value; missing columns read as `""`.
    pub fn normalized(&self, column: &str) -> String {
        normalize(self.get(column).unwrap_or_default())
    }

    /// Normalised join key.
    pub fn vrid_key(&self) -> String {
        self.normalized(VRID_COLUMN)
    }

    /// Number of columns in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Project to the operator-facing `{isa, vrid}` pair.
    ///
    /// Raw values are kept as exported; blank or absent cells become
    /// [`NOT_AVAILABLE`].
    pub fn to_ref(&self) -> RecordRef {
        RecordRef {
            isa: display_or_placeholder(self.get(ISA_COLUMN)),
            vrid: display_or_placeholder(self.get(VRID_COLUMN)),
        }
    }
}

fn display_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Ordered rows parsed from one export file, plus its header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// Normalised header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` when the header row contains `column` (already normalised).
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

/// Lightweight `{isa, vrid}` projection used by every bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub isa: String,
    pub vrid: String,
}

impl RecordRef {
    pub fn new(isa: impl Into<String>, vrid: impl Into<String>) -> Self {
        Self {
            isa: isa.into(),
            vrid: vrid.into(),
        }
    }
}

/// The closed set of record-list buckets carried by a [`MetricsReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricBucket {
    DropPallets,
    DropFloor,
    ParcelsDock,
    ParcelsYard,
    TransshipYard,
    AzngOver72,
    LivesHanded,
    Excluded,
}

impl MetricBucket {
    /// Every bucket, in report order.
    pub const ALL: [MetricBucket; 8] = [
        MetricBucket::DropPallets,
        MetricBucket::DropFloor,
        MetricBucket::ParcelsDock,
        MetricBucket::ParcelsYard,
        MetricBucket::TransshipYard,
        MetricBucket::AzngOver72,
        MetricBucket::LivesHanded,
        MetricBucket::Excluded,
    ];

    /// Stable identifier used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            MetricBucket::DropPallets => "dropPallets",
            MetricBucket::DropFloor => "dropFloor",
            MetricBucket::ParcelsDock => "parcelsDock",
            MetricBucket::ParcelsYard => "parcelsYard",
            MetricBucket::TransshipYard => "transshipYard",
            MetricBucket::AzngOver72 => "azngOver72",
            MetricBucket::LivesHanded => "livesHanded",
            MetricBucket::Excluded => "excluded",
        }
    }
}

/// Output of the metrics engine for one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub drop_pallets: Vec<RecordRef>,
    pub drop_floor: Vec<RecordRef>,
    pub parcels_dock: Vec<RecordRef>,
    pub parcels_yard: Vec<RecordRef>,
    pub transship_yard: Vec<RecordRef>,
    pub azng_over_72: Vec<RecordRef>,
    pub lives_handed: Vec<RecordRef>,
    /// Dock Dash records with no YMS counterpart, attached as given.
    pub excluded: Vec<RecordRef>,
    /// Units sitting at dock doors (`DD*` locations).
    pub volume_doors: u64,
    /// Units sitting in the yard (`PS*` locations).
    pub volume_yard: u64,
}

impl MetricsReport {
    pub fn bucket(&self, bucket: MetricBucket) -> &[RecordRef] {
        match bucket {
            MetricBucket::DropPallets => &self.drop_pallets,
            MetricBucket::DropFloor => &self.drop_floor,
            MetricBucket::ParcelsDock => &self.parcels_dock,
            MetricBucket::ParcelsYard => &self.parcels_yard,
            MetricBucket::TransshipYard => &self.transship_yard,
            MetricBucket::AzngOver72 => &self.azng_over_72,
            MetricBucket::LivesHanded => &self.lives_handed,
            MetricBucket::Excluded => &self.excluded,
        }
    }

    pub fn bucket_mut(&mut self, bucket: MetricBucket) -> &mut Vec<RecordRef> {
        match bucket {
            MetricBucket::DropPallets => &mut self.drop_pallets,
            MetricBucket::DropFloor => &mut self.drop_floor,
            MetricBucket::ParcelsDock => &mut self.parcels_dock,
            MetricBucket::ParcelsYard => &mut self.parcels_yard,
            MetricBucket::TransshipYard => &mut self.transship_yard,
            MetricBucket::AzngOver72 => &mut self.azng_over_72,
            MetricBucket::LivesHanded => &mut self.lives_handed,
            MetricBucket::Excluded => &mut self.excluded,
        }
    }

    pub fn count(&self, bucket: MetricBucket) -> usize {
        self.bucket(bucket).len()
    }

    /// Dock plus yard parcels; derived for display, never stored.
    pub fn total_parcels(&self) -> usize {
        self.parcels_dock.len() + self.parcels_yard.len()
    }
}

/// Everything one successful reconciliation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconOutcome {
    pub report: MetricsReport,
    pub excluded_count: usize,
    /// Newline-joined clipboard export.
    pub summary_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_pairs_normalizes_columns() {
        let record = Record::from_pairs([(" vrid ", "v1"), ("Isa", "I-1")]);
        assert_eq!(record.get("VRID"), Some("v1"));
        assert_eq!(record.get("ISA"), Some("I-1"));
        assert_eq!(record.get("vrid"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_record_normalized_missing_column_is_blank() {
        let record = Record::from_pairs([("LOCATION", " ps12 ")]);
        assert_eq!(record.normalized("LOCATION"), "PS12");
        assert_eq!(record.normalized("CARRIER"), "");
    }

    #[test]
    fn test_record_to_ref_uses_placeholder_for_blank() {
        let record = Record::from_pairs([("ISA", ""), ("VRID", "v9")]);
        assert_eq!(record.to_ref(), RecordRef::new("N/A", "v9"));

        let bare = Record::from_pairs([("LOCATION", "DD1")]);
        assert_eq!(bare.to_ref(), RecordRef::new("N/A", "N/A"));
    }

    #[test]
    fn test_record_to_ref_keeps_raw_case() {
        let record = Record::from_pairs([("ISA", "isa-7"), ("VRID", "abC")]);
        assert_eq!(record.to_ref(), RecordRef::new("isa-7", "abC"));
        assert_eq!(record.vrid_key(), "ABC");
    }

    #[test]
    fn test_dataset_accessors() {
        let ds = Dataset::new(
            vec!["A".into(), "B".into()],
            vec![Record::from_pairs([("A", "1"), ("B", "2")])],
        );
        assert_eq!(ds.len(), 1);
        assert!(!ds.is_empty());
        assert!(ds.has_column("A"));
        assert!(!ds.has_column("C"));
        assert_eq!(ds.iter().count(), 1);
        assert!(Dataset::default().is_empty());
    }

    #[test]
    fn test_report_bucket_accessors_cover_every_variant() {
        let mut report = MetricsReport::default();
        for (i, bucket) in MetricBucket::ALL.iter().enumerate() {
            for n in 0..=i {
                report
                    .bucket_mut(*bucket)
                    .push(RecordRef::new(format!("isa{n}"), format!("v{n}")));
            }
        }
        for (i, bucket) in MetricBucket::ALL.iter().enumerate() {
            assert_eq!(report.count(*bucket), i + 1, "{}", bucket.key());
        }
        assert_eq!(report.total_parcels(), 3 + 4);
    }

    #[test]
    fn test_report_serializes_camel_case_keys() {
        let report = MetricsReport {
            volume_doors: 10,
            ..Default::default()
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("dropPallets").is_some());
        assert!(value.get("azngOver72").is_some());
        assert_eq!(value["volumeDoors"], 10);
    }
}
