pub mod entry;
pub mod month;
pub mod month_summary;
pub mod punch;
pub mod user;
