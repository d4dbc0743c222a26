pub mod config;
pub mod explore;
pub mod export;
pub mod info;
pub mod init;
pub mod stats;
