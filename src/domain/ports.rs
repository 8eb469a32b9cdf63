use crate::domain::rates::rate_point::RatePoint;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Inclusive calendar-date window for a rate history request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// Need async_trait for async functions in traits
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the raw daily rate series for `range`, ascending by date.
    ///
    /// Days whose quote-currency value is missing or malformed are skipped
    /// rather than failing the whole fetch.
    async fn fetch_rates(&self, range: DateRange) -> Result<Vec<RatePoint>>;
}
