pub mod add;
pub mod auth;
pub mod backup;
pub mod calculator;
pub mod config;
pub mod del;
pub mod log;
pub mod punch;
pub mod summary;
