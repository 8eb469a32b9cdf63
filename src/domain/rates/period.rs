use crate::domain::errors::AggregationError;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucketing granularity for an exchange-rate series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    /// Returns all available periods in ascending bucket size
    pub fn all() -> [Period; 4] {
        [
            Period::Daily,
            Period::Weekly,
            Period::Monthly,
            Period::Yearly,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    /// Human-readable label for UI controls and chart titles
    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }

    /// Returns the first day of the fetch window ending at `today`.
    ///
    /// Coarser periods pull a longer history so that enough buckets survive
    /// the reduction: 30 days of dailies, 6 months for weekly buckets,
    /// 2 years for monthly, 10 years for yearly.
    pub fn lookback_start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => today.checked_sub_days(Days::new(30)),
            Period::Weekly => today.checked_sub_months(Months::new(6)),
            Period::Monthly => today.checked_sub_months(Months::new(24)),
            Period::Yearly => today.checked_sub_months(Months::new(120)),
        }
        .unwrap_or(today)
    }
}

impl FromStr for Period {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" | "1d" => Ok(Period::Daily),
            "weekly" | "week" | "1w" => Ok(Period::Weekly),
            "monthly" | "month" | "1mo" => Ok(Period::Monthly),
            "yearly" | "year" | "1y" => Ok(Period::Yearly),
            _ => Err(AggregationError::InvalidPeriod { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
