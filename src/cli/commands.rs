pub mod config;
pub mod init;
pub mod members;
pub mod report;
