mod common;
use common::{date, record, records, store_path};
use rshiftlog::export::{ExportFormat, ExportLogic, HEADERS, to_table, write_csv, write_json};
use rshiftlog::errors::AppError;
use rshiftlog::models::DailyRecord;
use rshiftlog::store::RecordStore;
use rshiftlog::ui::prompt::confirm_from;
use std::fs;

#[test]
fn test_rows_are_sorted_by_date() {
    let recs = records(&[
        ("2024-03-12", "09:00", "16:00"),
        ("2023-12-29", "08:00", "17:00"),
        ("2024-03-11", "09:00", "17:00"),
    ]);

    let rows = to_table(&recs);
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2023-12-29", "2024-03-11", "2024-03-12"]);

    assert_eq!(
        rows[1].cells(),
        ["2024-03-11", "Monday", "09:00", "17:00", "8h 0m", "0h 18m"]
    );
}

#[test]
fn test_missing_fields_export_as_empty_cells() {
    let mut recs = records(&[]);
    recs.insert(
        "2024-03-11".into(),
        DailyRecord {
            entry: "09:00".into(),
            ..DailyRecord::default()
        },
    );

    let rows = to_table(&recs);
    assert_eq!(rows[0].cells(), ["2024-03-11", "", "09:00", "", "", ""]);
}

#[test]
fn test_csv_has_header_and_one_line_per_record() {
    let recs = records(&[
        ("2024-03-12", "09:00", "16:00"),
        ("2024-03-11", "09:00", "17:00"),
    ]);

    let mut buf = Vec::new();
    write_csv(&mut buf, &to_table(&recs)).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], HEADERS.join(","));
    assert_eq!(lines[0], "Data,Giorno,Ingresso,Uscita,Ore Lavorate,Residuo");
    assert_eq!(lines[1], "2024-03-11,Monday,09:00,17:00,8h 0m,0h 18m");
    assert_eq!(lines[2], "2024-03-12,Tuesday,09:00,16:00,7h 0m,-0h 42m");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_csv_of_empty_table_is_header_only() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &[]).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Data,Giorno,Ingresso,Uscita,Ore Lavorate,Residuo\n"
    );
}

#[test]
fn test_json_export_is_an_array_of_rows() {
    let recs = records(&[("2024-03-11", "09:00", "17:00")]);

    let mut buf = Vec::new();
    write_json(&mut buf, &to_table(&recs)).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(json[0]["Data"], "2024-03-11");
    assert_eq!(json[0]["Residuo"], "0h 18m");
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_export_to_file_with_range() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(store_path(dir.path()));
    for (d, i, o) in [
        ("2024-02-28", "09:00", "17:00"),
        ("2024-03-11", "09:00", "17:00"),
        ("2024-03-12", "09:00", "16:00"),
    ] {
        store.upsert(date(d), record(d, i, o)).unwrap();
    }

    let out = dir.path().join("march.csv");
    let written = ExportLogic::export(
        &store,
        ExportFormat::Csv,
        &out.to_string_lossy(),
        Some("2024-03"),
        true,
    )
    .unwrap();

    assert_eq!(written, 2);
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("2024-03-11"));
    assert!(content.contains("2024-03-12"));
    assert!(!content.contains("2024-02-28"));
}

#[test]
fn test_export_of_empty_store_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(store_path(dir.path()));
    let out = dir.path().join("empty.csv");

    let written =
        ExportLogic::export(&store, ExportFormat::Csv, &out.to_string_lossy(), None, true)
            .unwrap();

    assert_eq!(written, 0);
    assert!(!out.exists());
}

#[test]
fn test_export_refuses_a_directory_as_target() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(store_path(dir.path()));
    store
        .upsert(date("2024-03-11"), record("2024-03-11", "09:00", "17:00"))
        .unwrap();

    let err = ExportLogic::export(
        &store,
        ExportFormat::Csv,
        &dir.path().to_string_lossy(),
        None,
        true,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Export(_)));
}

#[test]
fn test_overwrite_answer_must_be_yes() {
    for (answer, expected) in [
        ("y\n", true),
        ("YES\n", true),
        ("  yes  \n", true),
        ("n\n", false),
        ("\n", false),
        ("", false),
        ("yep\n", false),
    ] {
        let mut input = answer.as_bytes();
        assert_eq!(confirm_from(&mut input, "Replace?"), expected, "{answer:?}");
    }
}
