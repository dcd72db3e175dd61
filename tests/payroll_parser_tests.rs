mod common;
use common::PAYROLL_REPORT;
use rpayroll::models::RecordType;
use rpayroll::parser::line::{LineKind, classify_payroll_line, split_payroll_columns};
use rpayroll::parser::payroll::{PeriodHeader, parse_payroll, parse_payroll_with_year};

#[test]
fn test_payroll_extracts_weekday_rows() {
    let (records, stores) = parse_payroll(PAYROLL_REPORT);
    assert_eq!(stores, vec!["12".to_string()]);

    let punches: Vec<_> = records
        .iter()
        .filter(|r| r.record_type == RecordType::Clockset)
        .collect();
    assert_eq!(punches.len(), 3);

    let first = punches[0];
    assert_eq!(first.employee_id, "1001");
    assert_eq!(first.first_name, "Jane");
    assert_eq!(first.last_name, "Doe");
    assert_eq!(first.day_of_week, "Mon");
    assert_eq!(first.date, "01/06/2025");
    assert_eq!(first.duration_text, "8:30");
    assert_eq!(first.decimal_hours, Some(8.5));
    assert_eq!(first.start_time, "");
    assert_eq!(first.end_time, "");
    assert_eq!(first.store_id.as_deref(), Some("12"));
}

#[test]
fn test_payroll_quoted_row_strips_suffixes_and_completes_date() {
    let (records, _) = parse_payroll(PAYROLL_REPORT);
    let tue = records
        .iter()
        .find(|r| r.day_of_week == "Tue")
        .expect("tuesday row");

    assert_eq!(tue.employee_id, "1001");
    assert_eq!(tue.first_name, "Jane");
    assert_eq!(tue.date, "01/07/2025");
    assert_eq!(tue.decimal_hours, Some(9.0));
}

#[test]
fn test_payroll_skips_rows_without_decimal_duration() {
    let (records, _) = parse_payroll(PAYROLL_REPORT);
    assert!(records.iter().all(|r| r.day_of_week != "Wed"));
}

#[test]
fn test_payroll_overtime_row_resolved_to_employee() {
    let (records, _) = parse_payroll(PAYROLL_REPORT);
    let ot: Vec<_> = records
        .iter()
        .filter(|r| r.record_type == RecordType::OvertimeReported)
        .collect();

    assert_eq!(ot.len(), 1);
    assert_eq!(ot[0].employee_id, "1001");
    assert_eq!(ot[0].first_name, "Jane");
    assert_eq!(ot[0].last_name, "Doe");
    assert_eq!(ot[0].decimal_hours, Some(1.5));
    assert_eq!(ot[0].date, "");
    assert_eq!(ot[0].day_of_week, "");
}

#[test]
fn test_payroll_overtime_prefix_match_adopts_full_id() {
    let content = "Popeyes #5\nMon,01/06/2025,8:00,8,x,x,123456,c,Ann,Bee,x\n123 2.25\n";
    let (records, _) = parse_payroll_with_year(content, 2025);

    let ot = records
        .iter()
        .find(|r| r.record_type == RecordType::OvertimeReported)
        .expect("overtime row kept");
    assert_eq!(ot.employee_id, "123456");
    assert_eq!(ot.first_name, "Ann");
}

#[test]
fn test_payroll_unattributable_overtime_dropped() {
    let content = "Popeyes #5\nMon,01/06/2025,8:00,8,x,x,1001,c,Ann,Bee,x\n\"9999 3.5\"\n";
    let (records, _) = parse_payroll_with_year(content, 2025);

    assert_eq!(records.len(), 1);
    assert!(
        records
            .iter()
            .all(|r| r.record_type != RecordType::OvertimeReported)
    );
}

#[test]
fn test_payroll_short_rows_and_unknown_weekdays_are_noise() {
    assert_eq!(
        classify_payroll_line("Mon,01/06/2025,8:00,8,x,x,1001"),
        LineKind::Noise
    );
    assert_eq!(
        classify_payroll_line("Monday,01/06/2025,8:00,8,x,x,1001,c,A,B,x"),
        LineKind::Noise
    );
    assert_eq!(classify_payroll_line("   "), LineKind::Noise);
    assert_eq!(classify_payroll_line("\"quoted, but single\""), LineKind::Noise);
}

#[test]
fn test_payroll_store_marker_variants() {
    assert_eq!(
        classify_payroll_line("POPEYES LOUISIANA KITCHEN"),
        LineKind::StoreHeader(None)
    );
    assert_eq!(
        classify_payroll_line("Store: Popeye's 4411 - Main St"),
        LineKind::StoreHeader(Some("4411".to_string()))
    );
    assert_eq!(
        classify_payroll_line("POPEYES Kitchen #77"),
        LineKind::StoreHeader(Some("77".to_string()))
    );
}

#[test]
fn test_payroll_split_columns() {
    assert_eq!(
        split_payroll_columns("\"a\",\"b\",\"c\""),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert_eq!(
        split_payroll_columns("a, b ,c"),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert_eq!(split_payroll_columns("\"a,b\""), None);
    assert_eq!(split_payroll_columns("no columns"), None);
}

#[test]
fn test_period_header_year_inference() {
    let dec = PeriodHeader::from_content("Period: 12/23/2024 - 01/05/2025", 1999);
    assert_eq!(dec, PeriodHeader { month: 12, year: 2024 });
    assert_eq!(dec.complete_date("02-Jan"), "01/02/2025");
    assert_eq!(dec.complete_date("30-Dec"), "12/30/2024");

    let mar = PeriodHeader::from_content("Period: 03/03/2025", 1999);
    assert_eq!(mar.complete_date("31-Dec"), "12/31/2024");
    assert_eq!(mar.complete_date("04-Mar"), "03/04/2025");

    let missing = PeriodHeader::from_content("no header here", 2030);
    assert_eq!(missing, PeriodHeader { month: 12, year: 2030 });
    assert_eq!(missing.complete_date("10-Feb"), "02/10/2031");
}

#[test]
fn test_period_header_keeps_unrecognized_dates() {
    let h = PeriodHeader { month: 1, year: 2025 };
    assert_eq!(h.complete_date("01/06/2025"), "01/06/2025");
    assert_eq!(h.complete_date("7-Foo"), "7-Foo");
}

#[test]
fn test_payroll_records_before_marker_adopt_first_store() {
    let content = "Mon,01/06/2025,8:00,8,x,x,1001,c,Ann,Bee,x\nPopeyes #9\n";
    let (records, stores) = parse_payroll_with_year(content, 2025);
    assert_eq!(stores, vec!["9".to_string()]);
    assert_eq!(records[0].store_id.as_deref(), Some("9"));
}

#[test]
fn test_payroll_without_store_marker_has_no_store() {
    let content = "Mon,01/06/2025,8:00,8,x,x,1001,c,Ann,Bee,x\n";
    let (records, stores) = parse_payroll_with_year(content, 2025);
    assert!(stores.is_empty());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].store_id, None);
}

#[test]
fn test_payroll_parse_is_idempotent() {
    assert_eq!(
        parse_payroll_with_year(PAYROLL_REPORT, 2025),
        parse_payroll_with_year(PAYROLL_REPORT, 2025)
    );
}

#[test]
fn test_payroll_overtime_prefix_match_prefers_lowest_id() {
    let content = "Popeyes #5\n\
        Mon,01/06/2025,8:00,8,x,x,10052,c,Zed,Last,x\n\
        Mon,01/06/2025,8:00,8,x,x,10011,c,Amy,First,x\n\
        \"100 2.0\"\n";
    let (records, _) = parse_payroll_with_year(content, 2025);

    let ot = records
        .iter()
        .find(|r| r.record_type == RecordType::OvertimeReported)
        .expect("overtime row kept");
    assert_eq!(ot.employee_id, "10011");
    assert_eq!(ot.first_name, "Amy");
    assert_eq!(ot.last_name, "First");
}

#[test]
fn test_payroll_multiple_store_markers_in_one_file() {
    let content = "Popeyes #5\n\
        Mon,01/06/2025,8:00,8,x,x,1001,c,Ann,Bee,x\n\
        Popeyes #9\n\
        Tue,01/07/2025,6:00,6,x,x,2002,c,Cal,Dee,x\n\
        Wed,01/08/2025,4:00,4,x,x,2002,c,Cal,Dee,x\n";
    let (records, stores) = parse_payroll_with_year(content, 2025);

    assert_eq!(stores, vec!["5".to_string(), "9".to_string()]);
    let tagged: Vec<_> = records
        .iter()
        .map(|r| (r.employee_id.as_str(), r.store_id.as_deref()))
        .collect();
    assert_eq!(
        tagged,
        vec![("1001", Some("5")), ("2002", Some("9")), ("2002", Some("9"))]
    );
}
