#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rpayroll::models::{PunchRecord, RecordType, StoreFile};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rpay() -> Command {
    cargo_bin_cmd!("rpayroll")
}

/// Payroll export for store 12: Jane Doe (1001) and Mark Lee (1002).
pub const PAYROLL_REPORT: &str = r#"Previous Payroll Report
Period: 01/06/2025 - 01/19/2025
Popeyes #12
Day,Date,Hours,Decimal,In,Out,Employee,Job,First,Last,Rate
Mon,01/06/2025,8:30,8.5,x,x,1001,Cook,Jane,Doe,x
"Tue","07-Jan","9:00","9.00","","","1001--A","Cook","Jane--X","Doe","12.50"
"Wed","08-Jan","--","--","","","1001","Cook","Jane","Doe","12.50"
Thu,01/09/2025,6:00,6.0,x,x,1002,Cashier,Mark,Lee,x
Total hours for store,,,23.5
"1001 1.50"
"#;

/// Timeclock export for store 34: John Smith (2001).
pub const TIMECLOCK_REPORT: &str = r#"Timeclock Report
All Employees: ACTIVE
Popeyes #34
2001,John,Smith,ACTIVE
,*I,Mon,01/06/2025 09:00,01/06/2025 17:30,Clockset,8:30
,,Tue,01/07/2025 09:00,01/07/2025 10:00,Unpaid Break,1:00
"","*O","Wed","01/08/2025 12:00","01/08/2025 12:15","Paid Break","0:15"
"#;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// A Clockset punch of `hours` on `date` (MM/DD/YYYY).
pub fn punch(emp: &str, date: &str, hours: f64) -> PunchRecord {
    PunchRecord {
        employee_id: emp.to_string(),
        first_name: format!("F{emp}"),
        last_name: format!("L{emp}"),
        day_of_week: String::new(),
        date: date.to_string(),
        start_time: String::new(),
        end_time: String::new(),
        record_type: RecordType::Clockset,
        duration_text: hours.to_string(),
        decimal_hours: Some(hours),
        store_id: Some("7".to_string()),
    }
}

pub fn reported(emp: &str, hours: f64) -> PunchRecord {
    PunchRecord {
        day_of_week: String::new(),
        date: String::new(),
        record_type: RecordType::OvertimeReported,
        ..punch(emp, "", hours)
    }
}

pub fn store(records: Vec<PunchRecord>) -> StoreFile {
    let mut s = StoreFile::new("7");
    s.merge(records);
    s
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}
