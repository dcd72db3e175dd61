use serde::Serialize;
use std::fmt;

/// The two report layouts exported by the vendor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Dialect {
    /// "Previous/Reclose Payroll Report" layout (dialect A).
    Payroll,
    /// "Timeclock Report/Summary" layout (dialect B).
    Timeclock,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Payroll => "payroll",
            Dialect::Timeclock => "timeclock",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
