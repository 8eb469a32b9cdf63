use thiserror::Error;

/// Errors related to series aggregation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Invalid period: '{raw}'. Valid options: daily, weekly, monthly, yearly")]
    InvalidPeriod { raw: String },
}

/// Errors related to point comparison
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Percent change from {date} is undefined: baseline rate is zero")]
    ZeroBaseline { date: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_formatting() {
        let err = AggregationError::InvalidPeriod {
            raw: "hourly".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("hourly"));
        assert!(msg.contains("daily"));
    }

    #[test]
    fn test_zero_baseline_formatting() {
        let err = ComparisonError::ZeroBaseline {
            date: "2024-01-01".to_string(),
        };

        assert!(err.to_string().contains("2024-01-01"));
    }
}
