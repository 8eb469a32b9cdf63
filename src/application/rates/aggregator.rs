use crate::domain::rates::period::Period;
use crate::domain::rates::rate_point::RatePoint;
use crate::domain::rates::week;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Reduces an ascending raw daily series into one point per bucket.
///
/// Daily is the identity mapping. For coarser periods each point is keyed
/// by its bucket (`YYYY-Www` / `YYYY-MM` / `YYYY`) and the last point seen
/// for a key wins, so the bucket carries the most recent rate within it.
/// The result is ascending and unique by bucket key.
///
/// Points whose date cannot be keyed (unparseable or truncated) are
/// dropped, never an error. An empty input yields an empty output.
pub fn aggregate(raw: &[RatePoint], period: Period) -> Vec<RatePoint> {
    if period == Period::Daily {
        return raw.to_vec();
    }

    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for point in raw {
        let Some(key) = bucket_key(&point.date, period) else {
            debug!(date = %point.date, "Skipping rate point with malformed date");
            continue;
        };
        // Input is ascending, so the last insert per key is the latest date
        buckets.insert(key, point.value);
    }

    buckets
        .into_iter()
        .map(|(date, value)| RatePoint { date, value })
        .collect()
}

/// Derives the bucket key for a raw `YYYY-MM-DD` date string.
///
/// Month and year keys are fixed-width prefixes of the date, so a plain
/// lexicographic sort on keys is date order. Week keys need real calendar
/// math and go through the shared ISO-week module.
pub fn bucket_key(date: &str, period: Period) -> Option<String> {
    match period {
        Period::Daily => Some(date.to_string()),
        Period::Weekly => {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            Some(week::week_key(day))
        }
        Period::Monthly => date.get(0..7).map(str::to_string),
        Period::Yearly => date.get(0..4).map(str::to_string),
    }
}
