use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
    #[error("snapshot source error: {0}")]
    Snapshot(String),
}
