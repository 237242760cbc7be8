//! Integration tests for save/delete reconciliation
//!
//! These tests drive the `Reconciler` through the HTTP store against a local
//! fake of the REST API and assert on the exact requests that reach it.

mod common;

use common::FakeRecordStore;
use std::fs;
use tempfile::tempdir;
use xrdview::dataset::{
    Dataset, DatasetId, Element, RecordMetadata, RemoteId, SaveForm, WorkingSet,
};
use xrdview::export::{self, ExportFormat};
use xrdview::reconcile::{AlwaysConfirm, NeverConfirm, OverwriteRequest, Reconciler, SaveError};
use xrdview::remote::HttpRecordStore;
use xrdview::render::prepare;

fn reconciler(fake: &FakeRecordStore) -> Reconciler<HttpRecordStore> {
    Reconciler::new(HttpRecordStore::new(fake.base_url()).unwrap())
}

fn fields() -> RecordMetadata {
    RecordMetadata::new("alice", "Si", [Element::Si], 300.0).unwrap()
}

/// Load the fake's stored records into a fresh working set
fn fetch_into_set(reconciler: &Reconciler<HttpRecordStore>) -> WorkingSet {
    let mut set = WorkingSet::new();
    for record in reconciler.fetch_all().unwrap() {
        set.push(Dataset::from(record));
    }
    set
}

/// Test the full flow from text files to a saved record
#[test]
fn test_load_plot_and_save() {
    let fake = FakeRecordStore::start();
    let reconciler = reconciler(&fake);
    let dir = tempdir().unwrap();
    let good = dir.path().join("si.xy");
    let empty = dir.path().join("empty.xy");
    fs::write(&good, "2theta intensity\n28.44 1000\n47.30 550\n56.12 300\n").unwrap();
    fs::write(&empty, "# nothing here\n").unwrap();

    let mut set = WorkingSet::new();
    let report = set.load_files([&good, &empty]);
    assert_eq!(report.loaded.len(), 1);
    assert_eq!(report.failed.len(), 1);

    let local_id = report.loaded[0];
    let saved = reconciler
        .save_in(&mut set, &local_id, &fields(), &mut NeverConfirm)
        .unwrap();

    assert_eq!(saved, DatasetId::Remote(RemoteId(1)));
    assert_eq!(fake.request_lines(), vec!["POST /records"]);
    assert_eq!(fake.record(1).unwrap()["y"], serde_json::json!([1000.0, 550.0, 300.0]));

    let prepared = prepare(&set);
    assert_eq!(prepared.len(), 1);
    assert_eq!(prepared[0].label, "XRD - alice_Si_20250304_300K");
}

/// Test that confirming an overwrite issues exactly one update to that id
#[test]
fn test_confirmed_overwrite_updates_once() {
    let fake = FakeRecordStore::start();
    fake.seed("alice", "Si", &["Si"], 300.0);
    let target = fake.seed("bob", "Ni", &["Ni"], 77.0);
    let reconciler = reconciler(&fake);
    let mut set = fetch_into_set(&reconciler);
    let id = DatasetId::Remote(RemoteId(target));

    let edited = SaveForm {
        temperature: 80.0,
        ..SaveForm::from_metadata(set.get(&id).unwrap().metadata().unwrap())
    }
    .validate()
    .unwrap();

    let saved = reconciler
        .save_in(&mut set, &id, &edited, &mut AlwaysConfirm)
        .unwrap();

    assert_eq!(saved, id);
    assert_eq!(
        fake.request_lines(),
        vec![
            "GET /records".to_string(),
            format!("GET /records/{}/exists", target),
            format!("PUT /records/{}", target),
        ]
    );
    assert_eq!(fake.len(), 2);
    assert_eq!(fake.record(target).unwrap()["temperature"], 80.0);
    assert_eq!(fake.record(target).unwrap()["owner"], "bob");
    assert_eq!(set.position(&id), Some(1));
}

/// Test that declining the overwrite sends no write at all
#[test]
fn test_declined_overwrite_writes_nothing() {
    let fake = FakeRecordStore::start();
    let target = fake.seed("bob", "Ni", &["Ni"], 77.0);
    let reconciler = reconciler(&fake);
    let mut set = fetch_into_set(&reconciler);
    let id = DatasetId::Remote(RemoteId(target));
    let mut asked = Vec::new();

    let err = reconciler
        .save_in(&mut set, &id, &fields(), &mut |request: &OverwriteRequest<'_>| {
            asked.push(request.id);
            false
        })
        .unwrap_err();

    assert!(matches!(err, SaveError::UserCancelled));
    assert_eq!(asked, vec![RemoteId(target)]);
    assert!(fake.writes().is_empty());
    assert_eq!(fake.record(target).unwrap()["owner"], "bob");
}

/// Test that a record deleted remotely is recreated under a new id
#[test]
fn test_vanished_record_is_recreated() {
    let fake = FakeRecordStore::start();
    let target = fake.seed("bob", "Ni", &["Ni"], 77.0);
    let reconciler = reconciler(&fake);
    let mut set = fetch_into_set(&reconciler);
    let id = DatasetId::Remote(RemoteId(target));
    fake.forget(target);

    let saved = reconciler
        .save_in(&mut set, &id, &fields(), &mut NeverConfirm)
        .unwrap();

    assert_eq!(saved, DatasetId::Remote(RemoteId(target + 1)));
    assert_eq!(
        fake.request_lines()[1..],
        [format!("GET /records/{}/exists", target), "POST /records".to_string()]
    );
    assert_eq!(set.len(), 1);
    assert!(set.get(&id).is_none());
}

/// Test that a failed existence check aborts without writing
#[test]
fn test_failed_existence_check_aborts() {
    let fake = FakeRecordStore::start();
    let target = fake.seed("bob", "Ni", &["Ni"], 77.0);
    fake.respond_with(
        "GET",
        &format!("/records/{}/exists", target),
        503,
        "application/json",
        r#"{"detail": "database unavailable"}"#,
    );
    let reconciler = reconciler(&fake);
    let mut set = fetch_into_set(&reconciler);
    let id = DatasetId::Remote(RemoteId(target));

    let err = reconciler
        .save_in(&mut set, &id, &fields(), &mut AlwaysConfirm)
        .unwrap_err();

    match err {
        SaveError::ExistenceCheckFailed(inner) => {
            assert_eq!(inner.status(), Some(503));
            assert_eq!(inner.body().unwrap().detail(), "database unavailable");
        }
        other => panic!("expected ExistenceCheckFailed, got {other:?}"),
    }
    assert!(fake.writes().is_empty());
    assert!(!set.is_submitting(&id));
}

/// Test that a rejected update carries the server's detail
#[test]
fn test_rejected_update() {
    let fake = FakeRecordStore::start();
    let target = fake.seed("bob", "Ni", &["Ni"], 77.0);
    fake.respond_with(
        "PUT",
        &format!("/records/{}", target),
        422,
        "application/json",
        r#"{"detail": "temperature out of range"}"#,
    );
    let reconciler = reconciler(&fake);
    let mut set = fetch_into_set(&reconciler);
    let id = DatasetId::Remote(RemoteId(target));
    let before = set.get(&id).cloned();

    let err = reconciler
        .save_in(&mut set, &id, &fields(), &mut AlwaysConfirm)
        .unwrap_err();

    assert!(err.to_string().contains("temperature out of range"));
    assert_eq!(set.get(&id).cloned(), before);
}

/// Test deleting through the working set
#[test]
fn test_delete_in() {
    let fake = FakeRecordStore::start();
    let target = fake.seed("bob", "Ni", &["Ni"], 77.0);
    let reconciler = reconciler(&fake);
    let mut set = fetch_into_set(&reconciler);
    let local = Dataset::new_local(
        "scratch.xy",
        xrdview::series::parse("10 1\n20 2\n").unwrap(),
    );
    let local_id = *local.id();
    set.push(local);

    assert!(!reconciler.delete_in(&mut set, &local_id).unwrap());
    assert!(reconciler
        .delete_in(&mut set, &DatasetId::Remote(RemoteId(target)))
        .unwrap());

    assert_eq!(set.len(), 1);
    assert_eq!(fake.len(), 0);
    assert_eq!(
        fake.writes().iter().map(|s| s.line()).collect::<Vec<_>>(),
        vec![format!("DELETE /records/{}", target)]
    );
}

/// Test exporting a fetched record
#[test]
fn test_export_fetched_record() {
    let fake = FakeRecordStore::start();
    fake.seed("carol", "SiO2", &["Si", "O"], 295.5);
    let reconciler = reconciler(&fake);
    let dir = tempdir().unwrap();

    let records = reconciler.fetch_all().unwrap();
    let path = export::write_to_dir(&records[0], dir.path(), ExportFormat::Csv).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "20250115_SiO2_[Si-O]_295.5K.csv"
    );
    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, "2θ,Intensity\n10,100\n20,250\n30,80\n");

    let path = export::write_to_dir(&records[0], dir.path(), ExportFormat::default()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "20250115_SiO2_[Si-O]_295.5K.xlsx"
    );
    assert!(fs::metadata(&path).unwrap().len() > 0);
}
