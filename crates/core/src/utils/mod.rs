pub mod serde_date;
pub mod time_utils;
