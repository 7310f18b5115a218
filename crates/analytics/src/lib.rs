//! `assetdesk-analytics`
//!
//! Chart series derived from fetched records. Everything here is a pure
//! function of its inputs and an explicit "now"; fetching is the caller's job.

pub mod error;
pub mod inventory_trend;
pub mod usage_trend;

pub use error::AnalyticsError;
pub use inventory_trend::{InventoryTrendPoint, inventory_trend};
pub use usage_trend::{
    ChartPoint, Timeframe, UsageRecord, buckets, discover_metrics, metric_max, usage_series,
};
