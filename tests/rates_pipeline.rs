//! Full pipeline: wire payload -> aggregation -> session -> comparison.

use ratewatch::application::rates::comparator::Selection;
use ratewatch::application::rates::session::ChartSession;
use ratewatch::domain::rates::period::Period;
use ratewatch::domain::rates::rate_point::RatePoint;
use ratewatch::infrastructure::frankfurter::parse_rate_history;
use rust_decimal_macros::dec;

const FIXTURE: &str = r#"{
    "amount": 1.0,
    "base": "USD",
    "start_date": "2024-01-01",
    "end_date": "2024-01-08",
    "rates": {
        "2024-01-01": {"KRW": 1300.0},
        "2024-01-02": {"KRW": 1310.0},
        "2024-01-08": {"KRW": 1320.0}
    }
}"#;

#[test]
fn weekly_flow_from_payload_to_comparison() {
    let raw = parse_rate_history(FIXTURE, "KRW").unwrap();
    assert_eq!(raw.len(), 3);

    let mut session = ChartSession::new(Period::Weekly);
    assert!(session.apply_rates(Period::Weekly, raw));

    // 2024-01-01 and -02 share ISO week 1, the 8th opens week 2
    assert_eq!(
        session.series(),
        &[
            RatePoint::new("2024-W01", dec!(1310)),
            RatePoint::new("2024-W02", dec!(1320)),
        ]
    );

    let first = session.series()[0].clone();
    let second = session.series()[1].clone();
    assert_eq!(session.select_point(first).unwrap(), Selection::Pending);
    let outcome = session.select_point(second).unwrap();

    let Selection::Compared(record) = outcome else {
        panic!("expected a completed comparison, got {outcome:?}");
    };
    assert_eq!(record.absolute_difference, dec!(10.00));
    assert_eq!(record.percent_difference, dec!(0.76));
    assert!(session.pending_selection().is_empty());
    assert_eq!(session.comparisons().len(), 1);
}

#[test]
fn daily_comparison_matches_reference_numbers() {
    let mut session = ChartSession::new(Period::Daily);
    session.apply_rates(
        Period::Daily,
        vec![
            RatePoint::new("2024-01-01", dec!(1300)),
            RatePoint::new("2024-01-08", dec!(1320)),
        ],
    );

    session
        .select_point(RatePoint::new("2024-01-01", dec!(1300)))
        .unwrap();
    let outcome = session
        .select_point(RatePoint::new("2024-01-08", dec!(1320)))
        .unwrap();

    let Selection::Compared(record) = outcome else {
        panic!("expected a completed comparison");
    };
    assert_eq!(record.absolute_difference, dec!(20.00));
    assert_eq!(record.percent_difference, dec!(1.54));
    assert_eq!(record.percent_display(), "1.54%");
    assert!(session.pending_selection().is_empty());
}

#[test]
fn period_switch_discards_inflight_fetch_for_old_period() {
    let raw = parse_rate_history(FIXTURE, "KRW").unwrap();

    let mut session = ChartSession::new(Period::Weekly);
    // User switches before the weekly fetch resolves
    session.set_period(Period::Monthly);

    assert!(!session.apply_rates(Period::Weekly, raw.clone()));
    assert!(session.series().is_empty());

    // The monthly fetch for the same window lands normally
    assert!(session.apply_rates(Period::Monthly, raw));
    assert_eq!(session.series(), &[RatePoint::new("2024-01", dec!(1320))]);
}

#[test]
fn zero_baseline_is_surfaced_not_hidden() {
    let mut session = ChartSession::new(Period::Daily);
    session
        .select_point(RatePoint::new("2024-01-01", dec!(0)))
        .unwrap();
    let err = session
        .select_point(RatePoint::new("2024-01-02", dec!(1310)))
        .unwrap_err();

    assert!(err.to_string().contains("undefined"));
    // Failed pair still resets; no half-open selection survives
    assert!(session.pending_selection().is_empty());
    assert!(session.comparisons().is_empty());
}

#[test]
fn invalid_period_string_is_rejected() {
    let err = "hourly".parse::<Period>().unwrap_err();
    assert!(err.to_string().contains("hourly"));
}
