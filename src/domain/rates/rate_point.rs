use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single observation in an exchange-rate series.
///
/// `date` is a calendar date (`YYYY-MM-DD`) for raw points, or a bucket
/// label (`YYYY-Www`, `YYYY-MM`, `YYYY`) once the series has been
/// aggregated. Points are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: String,
    pub value: Decimal,
}

impl RatePoint {
    pub fn new(date: impl Into<String>, value: Decimal) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}
