use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("local time {0} does not exist in timezone {1} (DST gap)")]
    NonexistentLocalTime(NaiveDateTime, String),
}
