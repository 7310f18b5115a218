//! Usage-over-time series for service and license usage charts.
//!
//! A series is one [`ChartPoint`] per bucket of the selected [`Timeframe`];
//! each point sums the numeric usage values per series key (the user for
//! service usage, the asset for license usage).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use assetdesk_core::model::{LicenseUsage, ServiceUsage};
use assetdesk_core::time::parse_timestamp;
use assetdesk_core::wire::parse_number;

use crate::error::AnalyticsError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "7d")]
    LastWeek,
    #[serde(rename = "1m")]
    LastMonth,
    #[serde(rename = "1y")]
    LastYear,
    #[serde(rename = "5y")]
    LastFiveYears,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::LastWeek,
        Timeframe::LastMonth,
        Timeframe::LastYear,
        Timeframe::LastFiveYears,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::LastWeek => "7d",
            Timeframe::LastMonth => "1m",
            Timeframe::LastYear => "1y",
            Timeframe::LastFiveYears => "5y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::LastWeek => "Last 7 Days",
            Timeframe::LastMonth => "Last Month",
            Timeframe::LastYear => "Last Year",
            Timeframe::LastFiveYears => "Last 5 Years",
        }
    }

    /// Records at or before this instant fall outside the window.
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months = |n| now.checked_sub_months(Months::new(n)).unwrap_or(DateTime::<Utc>::MIN_UTC);
        match self {
            Timeframe::LastWeek => now - Duration::days(7),
            Timeframe::LastMonth => months(1),
            Timeframe::LastYear => months(12),
            Timeframe::LastFiveYears => months(60),
        }
    }

    /// Bucket a timestamp falls into, whether or not that bucket is charted.
    pub fn bucket_label(self, at: DateTime<Utc>) -> String {
        match self {
            Timeframe::LastWeek => at.format("%m/%d").to_string(),
            Timeframe::LastMonth => format!("Wk {}", week_of_year(at.date_naive())),
            Timeframe::LastYear => at.format("%b").to_string(),
            Timeframe::LastFiveYears => at.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AnalyticsError::UnknownTimeframe(s.to_string()))
    }
}

/// Bucket labels in chart order, oldest first.
///
/// - `7d`: the last seven days as `MM/DD`, today included,
/// - `1m`: five `Wk N` labels from the week containing "one month ago",
/// - `1y`: twelve month abbreviations ending with the current month,
/// - `5y`: five years ending with the current year.
pub fn buckets(timeframe: Timeframe, now: DateTime<Utc>) -> Vec<String> {
    match timeframe {
        Timeframe::LastWeek => (0..7)
            .rev()
            .map(|i| timeframe.bucket_label(now - Duration::days(i)))
            .collect(),
        Timeframe::LastMonth => {
            let month_ago = now
                .checked_sub_months(Months::new(1))
                .unwrap_or(now)
                .date_naive();
            let start = start_of_week(month_ago);
            (0..5)
                .map(|i| format!("Wk {}", week_of_year(start + Duration::weeks(i))))
                .collect()
        }
        Timeframe::LastYear => (0..12)
            .rev()
            .map(|i| timeframe.bucket_label(now.checked_sub_months(Months::new(i)).unwrap_or(now)))
            .collect(),
        Timeframe::LastFiveYears => (0..5)
            .rev()
            .map(|i| (now.year() - i).to_string())
            .collect(),
    }
}

/// A usage record that can be plotted.
pub trait UsageRecord {
    fn metric(&self) -> &str;
    fn value(&self) -> &str;
    fn recorded_at(&self) -> &str;
    /// Name of the line this record contributes to.
    fn series_key(&self) -> &str;
}

impl UsageRecord for ServiceUsage {
    fn metric(&self) -> &str {
        &self.usage_metric
    }

    fn value(&self) -> &str {
        &self.usage_value
    }

    fn recorded_at(&self) -> &str {
        &self.record_at
    }

    fn series_key(&self) -> &str {
        &self.user.username
    }
}

impl UsageRecord for LicenseUsage {
    fn metric(&self) -> &str {
        &self.usage_metric
    }

    fn value(&self) -> &str {
        &self.usage_value
    }

    fn recorded_at(&self) -> &str {
        &self.record_at
    }

    fn series_key(&self) -> &str {
        &self.asset.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub bucket: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl ChartPoint {
    fn empty(bucket: String) -> Self {
        Self {
            bucket,
            values: BTreeMap::new(),
        }
    }
}

/// Sum `metric` per bucket and series key.
///
/// Records older than the timeframe's cutoff, with an unparseable timestamp,
/// with a non-numeric value, or landing outside the charted buckets are
/// ignored.
pub fn usage_series<R: UsageRecord>(
    records: &[R],
    metric: &str,
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = buckets(timeframe, now)
        .into_iter()
        .map(ChartPoint::empty)
        .collect();
    let cutoff = timeframe.cutoff(now);

    for record in records.iter().filter(|r| r.metric() == metric) {
        let Some(at) = parse_timestamp(record.recorded_at()).filter(|at| *at > cutoff) else {
            continue;
        };
        let Some(value) = parse_number(record.value()) else {
            tracing::debug!(metric, value = record.value(), "non-numeric usage value skipped");
            continue;
        };
        let label = timeframe.bucket_label(at);
        if let Some(point) = points.iter_mut().find(|p| p.bucket == label) {
            *point.values.entry(record.series_key().to_string()).or_insert(0.0) += value;
        }
    }

    points
}

/// Distinct metrics across every selected entity, in first-seen order.
pub fn discover_metrics<'a, R, I>(groups: I) -> Vec<String>
where
    R: UsageRecord + 'a,
    I: IntoIterator<Item = &'a [R]>,
{
    let mut metrics: Vec<String> = Vec::new();
    for record in groups.into_iter().flatten() {
        if !metrics.iter().any(|m| m == record.metric()) {
            metrics.push(record.metric().to_string());
        }
    }
    metrics
}

/// Largest single value across several series of one metric, `0` when empty.
///
/// Used to give every chart of a metric the same y-axis.
pub fn metric_max<'a, I>(series: I) -> f64
where
    I: IntoIterator<Item = &'a [ChartPoint]>,
{
    series
        .into_iter()
        .flatten()
        .flat_map(|p| p.values.values().copied())
        .fold(0.0, f64::max)
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Week number with Sunday-start weeks where week 1 contains January 1st.
/// Late-December days whose week already contains the next January 1st are
/// week 1.
fn week_of_year(date: NaiveDate) -> u32 {
    let week_end = start_of_week(date) + Duration::days(6);
    if week_end.year() > date.year() {
        return 1;
    }
    let Some(jan1) = date.with_ordinal(1) else {
        return 1;
    };
    let days = (date - start_of_week(jan1)).num_days();
    (days / 7) as u32 + 1
}
