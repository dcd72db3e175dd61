mod common;
use common::{PAYROLL_REPORT, TIMECLOCK_REPORT, d};
use rpayroll::core::process::{PayrollBatch, RunSettings, build_reports, ingest_file};
use rpayroll::export::{ExportFormat, ExportLogic, OutputNames};
use rpayroll::models::Dialect;
use std::fs;

fn settings(wage_change: Option<chrono::NaiveDate>) -> RunSettings {
    RunSettings {
        pay_period_start: d(2025, 1, 6),
        wage_change,
    }
}

fn batch_of(files: &[(&str, &[u8])]) -> PayrollBatch {
    let mut batch = PayrollBatch::default();
    for (name, bytes) in files {
        batch.add(ingest_file(name, bytes).expect("decodable"));
    }
    batch
}

#[test]
fn test_single_weekday_row_end_to_end() {
    let content = "Popeyes #12\nMon,01/06/2025,8:30,8.5,x,x,1001,x,Jane,Doe,x\n";
    let batch = batch_of(&[("a.csv", content.as_bytes())]);
    let reports = build_reports(&batch, &settings(None));

    assert_eq!(reports.listing.len(), 1);
    let l = &reports.listing[0];
    assert_eq!(
        (l.store_no.as_str(), l.emp_id.as_str(), l.first_name.as_str(), l.last_name.as_str()),
        ("12", "1001", "Jane", "Doe")
    );
    assert_eq!((l.day.as_str(), l.date.as_str()), ("Mon", "01/06/2025"));
    assert_eq!(l.record_type, "Clockset");
    assert_eq!(l.duration, Some(8.5));

    assert_eq!(reports.pivot.len(), 1);
    let p = &reports.pivot[0];
    assert_eq!(p.store_no, "12");
    assert_eq!((p.total, p.regular, p.overtime), (8.5, 8.5, 0.0));
    assert_eq!((p.id.as_str(), p.first_name.as_str(), p.last_name.as_str()), ("1001", "Jane", "Doe"));

    assert!(reports.wage_split.is_none());
}

#[test]
fn test_unattributable_overtime_contributes_nothing() {
    let content = "Popeyes #12\nMon,01/06/2025,8:30,8.5,x,x,1001,x,Jane,Doe,x\n\"9999 3.5\"\n";
    let batch = batch_of(&[("a.csv", content.as_bytes())]);
    let reports = build_reports(&batch, &settings(Some(d(2026, 1, 1))));

    assert_eq!(reports.listing.len(), 1);
    assert_eq!(reports.pivot.len(), 1);
    assert_eq!(reports.pivot[0].overtime, 0.0);
    assert_eq!(reports.wage_split.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_two_dialects_merge_into_stores_in_ascending_order() {
    let batch = batch_of(&[
        ("clock.csv", TIMECLOCK_REPORT.as_bytes()),
        ("pay.csv", PAYROLL_REPORT.as_bytes()),
    ]);
    assert_eq!(batch.stores.keys().collect::<Vec<_>>(), vec!["12", "34"]);
    assert_eq!(batch.files[0].dialect, Some(Dialect::Timeclock));
    assert_eq!(batch.files[1].dialect, Some(Dialect::Payroll));

    let reports = build_reports(&batch, &settings(Some(d(2026, 1, 1))));
    let stores: Vec<_> = reports.listing.iter().map(|r| r.store_no.as_str()).collect();
    assert_eq!(stores, vec!["12", "12", "12", "34", "34"]);

    let jane = reports.pivot.iter().find(|p| p.id == "1001").expect("jane");
    assert_eq!(jane.total, 17.5);
    assert_eq!(jane.overtime, 1.5);
    assert_eq!(jane.regular, 16.0);

    let john = reports.pivot.iter().find(|p| p.id == "2001").expect("john");
    assert_eq!(john.total, 8.75);
    assert_eq!(john.store_no, "34");

    let split = reports.wage_split.expect("wage split enabled");
    for w in &split {
        let p = reports.pivot.iter().find(|p| p.id == w.id).expect("pivot row");
        assert!((w.total_hours_2025 + w.total_hours_2026 - p.total).abs() < 0.011);
    }
}

#[test]
fn test_same_store_across_files_is_double_counted() {
    let batch = batch_of(&[
        ("a.csv", PAYROLL_REPORT.as_bytes()),
        ("b.csv", PAYROLL_REPORT.as_bytes()),
    ]);
    assert_eq!(batch.stores.len(), 1);

    let reports = build_reports(&batch, &settings(None));
    let mark = reports.pivot.iter().find(|p| p.id == "1002").expect("mark");
    assert_eq!(mark.total, 12.0);
}

#[test]
fn test_file_without_store_marker_recovers_nothing() {
    let content = "Mon,01/06/2025,8:30,8.5,x,x,1001,x,Jane,Doe,x\n";
    let mut batch = PayrollBatch::default();
    let merged = batch.add(ingest_file("nostore.csv", content.as_bytes()).unwrap());

    assert_eq!(merged, 0);
    assert!(batch.is_empty());
    assert_eq!(batch.files[0].records, 0);
    assert!(build_reports(&batch, &settings(None)).is_empty());
}

#[test]
fn test_latin1_fallback_decoding() {
    let mut bytes = b"Popeyes #3\nMon,01/06/2025,8:00,8,x,x,5,c,Jos".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b",Ruiz,x\n");

    let outcome = ingest_file("latin1.csv", &bytes).expect("latin-1 fallback");
    assert_eq!(outcome.records[0].first_name, "José");
}

#[test]
fn test_utf8_bom_is_ignored() {
    let content = "\u{feff}Popeyes #3\nMon,01/06/2025,8:00,8,x,x,5,c,Ana,Ruiz,x\n";
    let outcome = ingest_file("bom.csv", content.as_bytes()).unwrap();
    assert_eq!(outcome.store_ids, vec!["3".to_string()]);
    assert_eq!(outcome.usable_count(), 1);
}

#[test]
fn test_one_file_with_two_stores_is_split_per_store() {
    let content = "Popeyes #5\n\
        Mon,01/06/2025,8:00,8,x,x,1001,c,Ann,Bee,x\n\
        Popeyes #9\n\
        Tue,01/07/2025,6:00,6,x,x,2002,c,Cal,Dee,x\n\
        \"200 1.0\"\n";
    let mut batch = PayrollBatch::default();
    let merged = batch.add(ingest_file("two.csv", content.as_bytes()).unwrap());

    assert_eq!(merged, 3);
    assert_eq!(batch.stores.keys().collect::<Vec<_>>(), vec!["5", "9"]);
    assert_eq!(batch.stores["5"].records.len(), 1);
    assert_eq!(batch.stores["9"].records.len(), 2);

    let reports = build_reports(&batch, &settings(None));
    let rows: Vec<_> = reports
        .pivot
        .iter()
        .map(|p| (p.store_no.as_str(), p.id.as_str(), p.total, p.overtime))
        .collect();
    assert_eq!(rows, vec![("5", "1001", 8.0, 0.0), ("9", "2002", 6.0, 1.0)]);
}

#[test]
fn test_csv_export_headers_follow_output_contract() {
    let batch = batch_of(&[("pay.csv", PAYROLL_REPORT.as_bytes())]);
    let reports = build_reports(&batch, &settings(Some(d(2026, 1, 1))));

    let dir = tempfile::tempdir().unwrap();
    let written = ExportLogic::export(&reports, dir.path(), ExportFormat::Csv, None, true).unwrap();
    assert_eq!(written.len(), 3);

    let first_line = |name: &str| {
        fs::read_to_string(dir.path().join(name))
            .unwrap()
            .lines()
            .next()
            .unwrap()
            .to_string()
    };

    assert_eq!(
        first_line(OutputNames::FORMATTED),
        "store_no,emp_id,first_name,last_name,day,date,start_time,end_time,type,duration"
    );
    assert_eq!(
        first_line(OutputNames::PIVOT),
        "store no,name,total,regular,overtime,id,first name,last name"
    );
    assert_eq!(
        first_line(OutputNames::WAGE_SPLIT),
        "store_no,name,id,first name,last name,total_hours_2025,regular_2025,overtime_2025,total_hours_2026,regular_2026,overtime_2026"
    );

    let listing = fs::read_to_string(dir.path().join(OutputNames::FORMATTED)).unwrap();
    assert!(listing.contains("12,1001,Jane,Doe,Mon,01/06/2025,,,Clockset,8.5"));
}

#[test]
fn test_json_and_xlsx_exports() {
    let batch = batch_of(&[("pay.csv", PAYROLL_REPORT.as_bytes())]);
    let reports = build_reports(&batch, &settings(None));
    let dir = tempfile::tempdir().unwrap();

    let json = ExportLogic::export(&reports, dir.path(), ExportFormat::Json, None, true).unwrap();
    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json[0]).unwrap()).unwrap();
    assert_eq!(doc["pivot"][0]["store no"], "12");
    assert_eq!(doc["formatted"].as_array().map(Vec::len), Some(3));
    assert!(doc.get("wage_split").is_none());

    let xlsx = ExportLogic::export(&reports, dir.path(), ExportFormat::Xlsx, None, true).unwrap();
    assert!(fs::metadata(&xlsx[0]).unwrap().len() > 0);
}
