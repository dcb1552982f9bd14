//! YMS / Dock Dash reconciliation.
//!
//! YMS is the source of truth.  A Dock Dash record is *excluded* when its
//! VRID is non-blank and appears nowhere in YMS; the metrics themselves are
//! computed from YMS alone.

use std::collections::HashSet;

use recon_core::error::{ReconError, Result};
use recon_core::formatting::format_units;
use recon_core::models::{Dataset, MetricsReport, ReconOutcome, RecordRef};
use tracing::info;

use crate::metrics::compute_metrics;

// ── Public API ────────────────────────────────────────────────────────────────

/// Normalised, non-blank VRIDs present in `yms`.
pub fn yms_vrid_set(yms: &Dataset) -> HashSet<String> {
    yms.iter()
        .map(|r| r.vrid_key())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Dock Dash records whose VRID is non-blank and absent from YMS, in Dock
/// Dash order.
pub fn find_exclusions(yms: &Dataset, dock_dash: &Dataset) -> Vec<RecordRef> {
    let known = yms_vrid_set(yms);
    dock_dash
        .iter()
        .filter(|r| {
            let vrid = r.vrid_key();
            !vrid.is_empty() && !known.contains(&vrid)
        })
        .map(|r| r.to_ref())
        .collect()
}

/// Build the 13-line clipboard export.
///
/// Line order is fixed; lines 8, 10 and 11 are intentionally blank.
pub fn build_summary(report: &MetricsReport) -> String {
    let lines: [String; 13] = [
        report.drop_pallets.len().to_string(),
        report.drop_floor.len().to_string(),
        report.parcels_dock.len().to_string(),
        report.parcels_yard.len().to_string(),
        report.total_parcels().to_string(),
        report.transship_yard.len().to_string(),
        report.azng_over_72.len().to_string(),
        String::new(),
        report.lives_handed.len().to_string(),
        String::new(),
        String::new(),
        format_units(report.volume_doors),
        format_units(report.volume_yard),
    ];
    lines.join("\n")
}

/// Reconcile `dock_dash` against `yms`.
///
/// Returns [`ReconError::NotReady`] when either dataset is empty, and
/// propagates [`ReconError::MissingHeaders`] from the metrics engine.
pub fn reconcile(yms: &Dataset, dock_dash: &Dataset) -> Result<ReconOutcome> {
    if yms.is_empty() || dock_dash.is_empty() {
        return Err(ReconError::NotReady);
    }

    let excluded = find_exclusions(yms, dock_dash);
    let report = compute_metrics(yms, &excluded)?;
    let summary_text = build_summary(&report);

    info!(
        yms_records = yms.len(),
        dock_dash_records = dock_dash.len(),
        excluded = excluded.len(),
        azng_over_72 = report.azng_over_72.len(),
        "reconciliation complete"
    );

    Ok(ReconOutcome {
        excluded_count: excluded.len(),
        report,
        summary_text,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::REQUIRED_HEADERS;
    use recon_core::models::Record;

    fn yms(vrids: &[&str]) -> Dataset {
        let mut headers: Vec<String> = REQUIRED_HEADERS.iter().map(|s| s.to_string()).collect();
        headers.push("VRID".into());
        let records = vrids
            .iter()
            .map(|v| {
                let mut pairs: Vec<(String, String)> =
                    REQUIRED_HEADERS.iter().map(|h| (h.to_string(), String::new())).collect();
                pairs.push(("VRID".into(), v.to_string()));
                Record::from_pairs(pairs)
            })
            .collect();
        Dataset::new(headers, records)
    }

    fn dock(rows: &[(&str, &str)]) -> Dataset {
        let records = rows
            .iter()
            .map(|(isa, vrid)| Record::from_pairs([("ISA", *isa), ("VRID", *vrid)]))
            .collect();
        Dataset::new(vec!["ISA".into(), "VRID".into()], records)
    }

    #[test]
    fn test_vrid_set_skips_blank_and_normalises() {
        let set = yms_vrid_set(&yms(&[" v1 ", "", "V2", "   "]));
        assert_eq!(set.len(), 2);
        assert!(set.contains("V1"));
        assert!(set.contains("V2"));
    }

    #[test]
    fn test_single_exclusion() {
        let outcome = reconcile(
            &yms(&["v1", "v2"]),
            &dock(&[("I1", "v1"), ("I9", "x9"), ("I2", "v2")]),
        )
        .unwrap();
        assert_eq!(outcome.excluded_count, 1);
        assert_eq!(outcome.report.excluded, vec![RecordRef::new("I9", "x9")]);
    }

    #[test]
    fn test_exclusion_is_case_and_whitespace_insensitive() {
        let excluded = find_exclusions(&yms(&["abc1"]), &dock(&[("I", " ABC1 "), ("J", "Abc1")]));
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_blank_dock_vrid_never_excluded() {
        let excluded = find_exclusions(&yms(&["v1", ""]), &dock(&[("I", ""), ("J", "  ")]));
        assert!(excluded.is_empty());
    }

    #[test]
    fn test_exclusion_preserves_dock_dash_order_and_duplicates() {
        let excluded = find_exclusions(
            &yms(&["keep"]),
            &dock(&[("a", "z"), ("b", "keep"), ("c", "y"), ("d", "z")]),
        );
        let vrids: Vec<_> = excluded.iter().map(|r| r.vrid.as_str()).collect();
        assert_eq!(vrids, ["z", "y", "z"]);
    }

    #[test]
    fn test_exclusion_property_holds_for_every_record() {
        let y = yms(&["A1", "b2", " c3"]);
        let d = dock(&[("1", "a1"), ("2", "B2 "), ("3", "d4"), ("4", ""), ("5", "C3"), ("6", "e5")]);
        let known = yms_vrid_set(&y);
        let excluded = find_exclusions(&y, &d);
        for record in d.iter() {
            let key = record.vrid_key();
            let expected = !key.is_empty() && !known.contains(&key);
            assert_eq!(excluded.contains(&record.to_ref()), expected, "vrid {key:?}");
        }
    }

    #[test]
    fn test_not_ready_when_either_side_empty() {
        let empty = Dataset::default();
        assert!(matches!(reconcile(&empty, &dock(&[("I", "v")])), Err(ReconError::NotReady)));
        assert!(matches!(reconcile(&yms(&["v"]), &empty), Err(ReconError::NotReady)));
    }

    #[test]
    fn test_missing_headers_propagate() {
        let bare_yms = dock(&[("I", "v1")]);
        let err = reconcile(&bare_yms, &dock(&[("I", "v1")])).unwrap_err();
        assert!(matches!(err, ReconError::MissingHeaders(_)));
        assert!(err.to_string().contains("UNITS"));
    }

    #[test]
    fn test_summary_layout() {
        let r = |n: usize| -> Vec<RecordRef> {
            (0..n).map(|i| RecordRef::new("I", format!("v{i}"))).collect()
        };
        let report = MetricsReport {
            drop_pallets: r(1),
            drop_floor: r(2),
            parcels_dock: r(3),
            parcels_yard: r(4),
            transship_yard: r(5),
            azng_over_72: r(6),
            lives_handed: r(7),
            excluded: r(9),
            volume_doors: 12_345,
            volume_yard: 678,
        };
        let summary = build_summary(&report);
        let lines: Vec<&str> = summary.split('\n').collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines,
            ["1", "2", "3", "4", "7", "5", "6", "", "7", "", "", "12,345", "678"]
        );
    }

    #[test]
    fn test_summary_of_empty_report() {
        assert_eq!(
            build_summary(&MetricsReport::default()),
            "0\n0\n0\n0\n0\n0\n0\n\n0\n\n\n0\n0"
        );
    }
}
