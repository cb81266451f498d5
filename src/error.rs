use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid time format (expected HH:MM): {0:?}")]
    InvalidTimeFormat(String),
    #[error("invalid date format (expected YYYY-MM-DD): {0:?}")]
    InvalidDate(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
