use crate::domain::rates::rate_point::RatePoint;
use rust_decimal::Decimal;
use serde::Serialize;

/// The outcome of comparing two user-selected rate points.
///
/// Both differences are pre-rounded to 2 decimal places; derived once,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRecord {
    pub first: RatePoint,
    pub second: RatePoint,
    pub absolute_difference: Decimal,
    pub percent_difference: Decimal,
}

impl ComparisonRecord {
    /// Display form of the percent difference, e.g. `"1.54%"`.
    pub fn percent_display(&self) -> String {
        format!("{:.2}%", self.percent_difference)
    }

    /// Display form of the absolute difference, e.g. `"20.00"`.
    pub fn absolute_display(&self) -> String {
        format!("{:.2}", self.absolute_difference)
    }
}
