pub mod config;
pub mod detect;
pub mod init;
pub mod process;
