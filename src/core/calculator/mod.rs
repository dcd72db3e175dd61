pub mod overtime;
pub mod week;
