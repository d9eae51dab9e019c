use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("Unknown statistic: {0}")]
    UnknownStat(String),

    #[error("Unknown scope: {0}")]
    UnknownScope(String),
}
