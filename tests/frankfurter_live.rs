use chrono::NaiveDate;
use ratewatch::domain::ports::{DateRange, RateSource};
use ratewatch::infrastructure::frankfurter::FrankfurterRateSource;
use tokio_test::assert_ok;

// Run with: cargo test --test frankfurter_live -- --ignored --nocapture
// Hits the public Frankfurter API, so it is ignored by default.
#[tokio::test]
#[ignore]
async fn fetches_a_real_rate_window() {
    let source = FrankfurterRateSource::builder().build();

    let range = DateRange {
        start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    };

    let points = assert_ok!(source.fetch_rates(range).await);

    // ~22 trading days in January 2024; weekends are absent
    assert!(points.len() >= 20, "got {} points", points.len());
    for pair in points.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}
