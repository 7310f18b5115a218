use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("unknown timeframe: {0} (expected 7d, 1m, 1y or 5y)")]
    UnknownTimeframe(String),
}
