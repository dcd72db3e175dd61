use crate::models::punch::PunchRecord;

/// All punch records attached to one store, possibly gathered from many files.
///
/// Merging is plain concatenation: overlapping uploads are counted twice.
#[derive(Debug, Clone, Default)]
pub struct StoreFile {
    pub store_id: String,
    pub records: Vec<PunchRecord>,
}

impl StoreFile {
    pub fn new(store_id: impl Into<String>) -> Self {
        Self {
            store_id: store_id.into(),
            records: Vec::new(),
        }
    }

    pub fn merge(&mut self, records: impl IntoIterator<Item = PunchRecord>) {
        self.records.extend(records);
    }

    /// Clock events only (Clockset / Paid Break).
    pub fn punches(&self) -> impl Iterator<Item = &PunchRecord> {
        self.records.iter().filter(|r| r.record_type.is_punch())
    }

    pub fn overtime_corrections(&self) -> impl Iterator<Item = &PunchRecord> {
        self.records
            .iter()
            .filter(|r| r.record_type.is_overtime_reported())
    }
}
