//! YMS metrics engine.
//!
//! Every YMS record is classified independently against a fixed rule table;
//! a record can land in several buckets at once.  The engine is a pure
//! function of the dataset and the exclusion list handed in by the
//! reconciler.

use recon_core::error::{ReconError, Result};
use recon_core::models::{Dataset, MetricBucket, MetricsReport, Record, RecordRef};
use recon_core::numeric::{parse_float_or_zero, parse_hours, parse_int_or_zero};
use tracing::debug;

// ── Column names ──────────────────────────────────────────────────────────────

pub const LOCATION: &str = "LOCATION";
pub const CARRIER_LOAD_TYPE: &str = "CARRIER LOAD TYPE";
pub const APPOINTMENT_TYPE: &str = "APPOINTMENT TYPE";
pub const CARRIER: &str = "CARRIER";
pub const YARD_DWELL: &str = "YARD DWELL";
pub const PALLETS: &str = "PALLETS";
pub const UNITS: &str = "UNITS";

/// Columns the YMS export must carry for metrics to be computed.
pub const REQUIRED_HEADERS: [&str; 7] = [
    LOCATION,
    CARRIER_LOAD_TYPE,
    APPOINTMENT_TYPE,
    CARRIER,
    YARD_DWELL,
    PALLETS,
    UNITS,
];

/// Dwell threshold, in hours, for the AZNG watch list (inclusive).
pub const AZNG_DWELL_HOURS: f64 = 72.0;

const DOOR_PREFIX: &str = "DD";
const YARD_PREFIX: &str = "PS";

// ── YardRow ───────────────────────────────────────────────────────────────────

/// The classification-relevant fields of one YMS record, already
/// normalised and coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct YardRow {
    pub load_type: String,
    pub appointment: String,
    pub location: String,
    pub carrier: String,
    pub dwell_hours: f64,
    pub pallets: f64,
    pub units: i64,
}

impl YardRow {
    pub fn from_record(record: &Record) -> Self {
        let raw = |column: &str| record.get(column).unwrap_or_default();
        Self {
            load_type: record.normalized(CARRIER_LOAD_TYPE),
            appointment: record.normalized(APPOINTMENT_TYPE),
            location: record.normalized(LOCATION),
            carrier: record.normalized(CARRIER),
            dwell_hours: parse_hours(raw(YARD_DWELL)),
            pallets: parse_float_or_zero(raw(PALLETS)),
            units: parse_int_or_zero(raw(UNITS)),
        }
    }

    /// Parked at a dock door.
    pub fn at_door(&self) -> bool {
        self.location.starts_with(DOOR_PREFIX)
    }

    /// Parked in a yard slot.
    pub fn in_yard(&self) -> bool {
        self.location.starts_with(YARD_PREFIX)
    }

    /// Buckets this row belongs to, in report order.
    pub fn buckets(&self) -> Vec<MetricBucket> {
        let mut out = Vec::new();

        if self.load_type == "DROP" && self.appointment == "CARP" && self.in_yard() {
            if self.pallets > 0.0 {
                out.push(MetricBucket::DropPallets);
            } else {
                out.push(MetricBucket::DropFloor);
            }
        }

        if self.appointment == "SMALL_PARCEL" {
            if self.at_door() {
                out.push(MetricBucket::ParcelsDock);
            }
            if self.in_yard() {
                out.push(MetricBucket::ParcelsYard);
            }
        }

        if self.appointment == "TRANSSHIP" && self.in_yard() {
            out.push(MetricBucket::TransshipYard);
        }

        if self.carrier.starts_with('A') && self.dwell_hours >= AZNG_DWELL_HOURS {
            out.push(MetricBucket::AzngOver72);
        }

        if self.load_type == "LIVE" && self.at_door() {
            out.push(MetricBucket::LivesHanded);
        }

        out
    }

}

// ── Public API ────────────────────────────────────────────────────────────────

/// Required columns absent from `dataset`'s header row, in
/// [`REQUIRED_HEADERS`] order.
pub fn missing_headers(dataset: &Dataset) -> Vec<String> {
    REQUIRED_HEADERS
        .iter()
        .filter(|h| !dataset.has_column(h))
        .map(|h| h.to_string())
        .collect()
}

/// Compute the metrics report for `yms`, attaching `excluded` verbatim.
///
/// Fails with [`ReconError::MissingHeaders`] when any required column is
/// absent; partial metrics are never produced.
pub fn compute_metrics(yms: &Dataset, excluded: &[RecordRef]) -> Result<MetricsReport> {
    let missing = missing_headers(yms);
    if !missing.is_empty() {
        return Err(ReconError::MissingHeaders(missing));
    }

    let mut report = MetricsReport {
        excluded: excluded.to_vec(),
        ..Default::default()
    };
    let mut volume_doors: i64 = 0;
    let mut volume_yard: i64 = 0;

    for record in yms.iter() {
        let row = YardRow::from_record(record);

        let buckets = row.buckets();
        if !buckets.is_empty() {
            let info = record.to_ref();
            for bucket in buckets {
                report.bucket_mut(bucket).push(info.clone());
            }
        }

        if row.at_door() {
            volume_doors = volume_doors.saturating_add(row.units);
        }
        if row.in_yard() {
            volume_yard = volume_yard.saturating_add(row.units);
        }
    }

    // Signed sums; only a negative grand total is floored.
    report.volume_doors = clamp_volume(volume_doors);
    report.volume_yard = clamp_volume(volume_yard);

    debug!(
        records = yms.len(),
        drop_pallets = report.drop_pallets.len(),
        drop_floor = report.drop_floor.len(),
        azng_over_72 = report.azng_over_72.len(),
        volume_doors = report.volume_doors,
        volume_yard = report.volume_yard,
        "metrics computed"
    );

    Ok(report)
}

fn clamp_volume(total: i64) -> u64 {
    u64::try_from(total).unwrap_or(0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
