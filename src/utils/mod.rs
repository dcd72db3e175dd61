pub mod date;
pub mod duration;
pub mod path;
pub mod table;
pub mod text;

pub use duration::{parse_duration_to_decimal, round2};
