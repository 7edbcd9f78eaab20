use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    #[error("samples must not be empty")]
    EmptySample,

    #[error("q must be between 0 and 1, got {0}")]
    InvalidQuantile(f64),
}

pub type Result<T> = std::result::Result<T, StatsError>;
