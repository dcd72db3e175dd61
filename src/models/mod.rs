pub mod dialect;
pub mod punch;
pub mod report;
pub mod store;

pub use dialect::Dialect;
pub use punch::{PunchRecord, RecordType};
pub use report::{ListingRow, PivotRow, WageSplitRow};
pub use store::StoreFile;
