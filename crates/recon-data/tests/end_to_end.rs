use std::path::Path;

use recon_data::core::error::ReconError;
use recon_data::core::models::RecordRef;
use recon_data::loader::{load_dataset, load_dataset_from_text};
use recon_data::reader::parse_csv;
use recon_data::reconciler::reconcile;

const YMS_CSV: &str = "\
VRID,ISA,LOCATION,CARRIER LOAD TYPE,APPOINTMENT TYPE,CARRIER,YARD DWELL,PALLETS,UNITS
v1,isa-1,PS1,DROP,CARP,ACME,80hrs,5,10
v2,isa-2,PS2,DROP,CARP,ZETA,10hrs,0,20
v3,isa-3,DD1,LIVE,SMALL_PARCEL,AZNG,72hrs,,1500
v4,isa-4,PS3,DROP,TRANSSHIP,BOLT,5hrs,1,30
v5,isa-5,YARD,LIVE,CARP,BOLT,1hrs,1
";

const DOCK_DASH_CSV: &str = "\
ISA,VRID,STATUS
isa-1,V1 ,ARRIVED
isa-9,x9,ARRIVED
isa-0,,ARRIVED
";

#[test]
fn reconcile_exports_end_to_end() {
    let yms = parse_csv(YMS_CSV).unwrap();
    let dock = parse_csv(DOCK_DASH_CSV).unwrap();
    // The short v5 row is dropped.
    assert_eq!(yms.len(), 4);
    assert_eq!(dock.len(), 3);

    let outcome = reconcile(&yms, &dock).unwrap();
    let report = &outcome.report;

    assert_eq!(outcome.excluded_count, 1);
    assert_eq!(report.excluded, vec![RecordRef::new("isa-9", "x9")]);

    assert_eq!(report.drop_pallets, vec![RecordRef::new("isa-1", "v1")]);
    assert_eq!(report.drop_floor, vec![RecordRef::new("isa-2", "v2")]);
    assert_eq!(report.parcels_dock, vec![RecordRef::new("isa-3", "v3")]);
    assert!(report.parcels_yard.is_empty());
    assert_eq!(report.transship_yard, vec![RecordRef::new("isa-4", "v4")]);
    assert_eq!(
        report.azng_over_72,
        vec![RecordRef::new("isa-1", "v1"), RecordRef::new("isa-3", "v3")]
    );
    assert_eq!(report.lives_handed, vec![RecordRef::new("isa-3", "v3")]);
    assert_eq!(report.volume_doors, 1500);
    assert_eq!(report.volume_yard, 10 + 20 + 30);

    assert_eq!(
        outcome.summary_text,
        "1\n1\n1\n0\n1\n1\n2\n\n1\n\n\n1,500\n60"
    );
}

#[test]
fn reconcile_is_repeatable() {
    let yms = parse_csv(YMS_CSV).unwrap();
    let dock = parse_csv(DOCK_DASH_CSV).unwrap();
    assert_eq!(reconcile(&yms, &dock).unwrap(), reconcile(&yms, &dock).unwrap());
}

#[test]
fn yms_without_units_column_fails_reconciliation() {
    let yms = parse_csv(
        "VRID,LOCATION,CARRIER LOAD TYPE,APPOINTMENT TYPE,CARRIER,YARD DWELL,PALLETS\n\
         v1,PS1,DROP,CARP,ACME,80hrs,5\n",
    )
    .unwrap();
    let dock = parse_csv(DOCK_DASH_CSV).unwrap();
    let err = reconcile(&yms, &dock).unwrap_err();
    assert!(matches!(err, ReconError::MissingHeaders(ref cols) if cols == &["UNITS"]));
}

#[test]
fn duplicate_header_export_is_refused() {
    let err = load_dataset_from_text(Path::new("yms.csv"), "VRID,vrid,ISA\n1,2,3\n").unwrap_err();
    assert!(matches!(err, ReconError::DuplicateHeaders(_)));
}

#[tokio::test]
async fn load_then_reconcile_from_disk() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let yms_path = tmp.path().join("yms.csv");
    let dock_path = tmp.path().join("dockdash.csv");
    std::fs::write(&yms_path, YMS_CSV.replace('\n', "\r\n")).unwrap();
    std::fs::write(&dock_path, DOCK_DASH_CSV).unwrap();

    let yms = load_dataset(&yms_path).await.unwrap();
    let dock = load_dataset(&dock_path).await.unwrap();
    let outcome = reconcile(&yms, &dock).unwrap();
    assert_eq!(outcome.excluded_count, 1);
    assert_eq!(outcome.report.volume_yard, 60);
}
