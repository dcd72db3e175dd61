//! Report parsing: dialect detection and the two line-oriented parsers.

pub mod detect;
pub mod line;
pub mod payroll;
pub mod store_marker;
pub mod timeclock;

pub use detect::detect_dialect;

use crate::models::{Dialect, PunchRecord};

/// Result of parsing one file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub dialect: Dialect,
    pub records: Vec<PunchRecord>,
    /// Distinct store ids in order of first appearance.
    pub store_ids: Vec<String>,
}

/// Detect the dialect of `content` and run the matching parser.
pub fn parse_report(content: &str) -> ParsedFile {
    let dialect = detect_dialect(content);
    let (records, store_ids) = match dialect {
        Dialect::Payroll => payroll::parse_payroll(content),
        Dialect::Timeclock => timeclock::parse_timeclock(content),
    };

    ParsedFile {
        dialect,
        records,
        store_ids,
    }
}

/// Tracks store markers seen while scanning a file.
///
/// Records parsed before the first marker adopt the first store id seen.
#[derive(Debug, Default)]
pub(crate) struct StoreTracker {
    current: Option<String>,
    seen: Vec<String>,
}

impl StoreTracker {
    pub(crate) fn update(&mut self, id: Option<String>) {
        if let Some(id) = id {
            if !self.seen.contains(&id) {
                self.seen.push(id.clone());
            }
            self.current = Some(id);
        }
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.current.clone()
    }

    pub(crate) fn has_store(&self) -> bool {
        self.current.is_some()
    }

    /// Backfill unattributed records and hand back the distinct store ids.
    pub(crate) fn finish(self, records: &mut [PunchRecord]) -> Vec<String> {
        if let Some(first) = self.seen.first() {
            for r in records.iter_mut().filter(|r| r.store_id.is_none()) {
                r.store_id = Some(first.clone());
            }
        }
        self.seen
    }
}
