use crate::application::rates::aggregator;
use crate::application::rates::comparator::{DedupPolicy, PointComparator, Selection};
use crate::domain::errors::ComparisonError;
use crate::domain::rates::comparison::ComparisonRecord;
use crate::domain::rates::period::Period;
use crate::domain::rates::rate_point::RatePoint;
use tracing::{debug, info};

/// Whether completed comparisons pile up or the newest replaces the last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonHistory {
    #[default]
    Accumulate,
    ReplaceLatest,
}

/// All mutable chart state for one viewer, behind explicit methods.
///
/// Owns the active period, the bucketed series, the pending selection and
/// the completed comparisons. Fetch results must be tagged with the period
/// they were requested for; results for a superseded period are discarded,
/// which keeps an out-of-order fetch resolution from clobbering the series
/// the user is looking at.
#[derive(Debug)]
pub struct ChartSession {
    period: Period,
    series: Vec<RatePoint>,
    comparator: PointComparator,
    comparisons: Vec<ComparisonRecord>,
    history: ComparisonHistory,
}

impl ChartSession {
    pub fn new(period: Period) -> Self {
        Self::with_policies(period, DedupPolicy::default(), ComparisonHistory::default())
    }

    pub fn with_policies(
        period: Period,
        dedup: DedupPolicy,
        history: ComparisonHistory,
    ) -> Self {
        Self {
            period,
            series: Vec::new(),
            comparator: PointComparator::new(dedup),
            comparisons: Vec::new(),
            history,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// The bucketed series currently on screen
    pub fn series(&self) -> &[RatePoint] {
        &self.series
    }

    pub fn comparisons(&self) -> &[ComparisonRecord] {
        &self.comparisons
    }

    pub fn pending_selection(&self) -> &[RatePoint] {
        self.comparator.pending()
    }

    /// Switches granularity: clears the series, the pending selection and
    /// the comparison history, and invalidates any in-flight fetch for the
    /// old period. No-op when the period is unchanged.
    pub fn set_period(&mut self, period: Period) {
        if period == self.period {
            return;
        }
        info!(from = %self.period, to = %period, "Switching chart period");
        self.period = period;
        self.series.clear();
        self.comparator.reset();
        self.comparisons.clear();
    }

    /// Installs a fetched raw series, aggregating it for the active period.
    ///
    /// `requested` is the period the fetch was issued for. Returns `false`
    /// without touching any state when that period is no longer active.
    pub fn apply_rates(&mut self, requested: Period, raw: Vec<RatePoint>) -> bool {
        if requested != self.period {
            debug!(
                requested = %requested,
                active = %self.period,
                "Discarding stale rate response"
            );
            return false;
        }
        self.series = aggregator::aggregate(&raw, self.period);
        info!(
            period = %self.period,
            raw = raw.len(),
            buckets = self.series.len(),
            "Installed aggregated rate series"
        );
        true
    }

    /// Forwards a chart click to the comparator and files any completed
    /// record per the history policy.
    pub fn select_point(&mut self, point: RatePoint) -> Result<Selection, ComparisonError> {
        let outcome = self.comparator.select(point)?;
        if let Selection::Compared(record) = &outcome {
            match self.history {
                ComparisonHistory::Accumulate => self.comparisons.push(record.clone()),
                ComparisonHistory::ReplaceLatest => {
                    self.comparisons.clear();
                    self.comparisons.push(record.clone());
                }
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw_series() -> Vec<RatePoint> {
        vec![
            RatePoint::new("2024-01-01", dec!(1300)),
            RatePoint::new("2024-01-02", dec!(1310)),
            RatePoint::new("2024-01-08", dec!(1320)),
        ]
    }

    #[test]
    fn test_apply_rates_aggregates_for_active_period() {
        let mut session = ChartSession::new(Period::Weekly);
        assert!(session.apply_rates(Period::Weekly, raw_series()));

        assert_eq!(
            session.series(),
            &[
                RatePoint::new("2024-W01", dec!(1310)),
                RatePoint::new("2024-W02", dec!(1320)),
            ]
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = ChartSession::new(Period::Weekly);
        assert!(session.apply_rates(Period::Weekly, raw_series()));

        session.set_period(Period::Monthly);
        // Late resolution of the weekly fetch must not clobber the view
        assert!(!session.apply_rates(Period::Weekly, raw_series()));
        assert!(session.series().is_empty());
    }

    #[test]
    fn test_period_change_resets_selection_and_comparisons() {
        let mut session = ChartSession::new(Period::Daily);
        session.apply_rates(Period::Daily, raw_series());

        session
            .select_point(RatePoint::new("2024-01-01", dec!(1300)))
            .unwrap();
        session
            .select_point(RatePoint::new("2024-01-08", dec!(1320)))
            .unwrap();
        session
            .select_point(RatePoint::new("2024-01-02", dec!(1310)))
            .unwrap();
        assert_eq!(session.comparisons().len(), 1);
        assert_eq!(session.pending_selection().len(), 1);

        session.set_period(Period::Weekly);
        assert!(session.comparisons().is_empty());
        assert!(session.pending_selection().is_empty());
        assert!(session.series().is_empty());
    }

    #[test]
    fn test_set_same_period_keeps_state() {
        let mut session = ChartSession::new(Period::Daily);
        session.apply_rates(Period::Daily, raw_series());
        session.set_period(Period::Daily);
        assert_eq!(session.series().len(), 3);
    }

    #[test]
    fn test_comparisons_accumulate_by_default() {
        let mut session = ChartSession::new(Period::Daily);
        for (a, b) in [("2024-01-01", "2024-01-02"), ("2024-01-02", "2024-01-08")] {
            session.select_point(RatePoint::new(a, dec!(1300))).unwrap();
            session.select_point(RatePoint::new(b, dec!(1310))).unwrap();
        }
        assert_eq!(session.comparisons().len(), 2);
    }

    #[test]
    fn test_replace_latest_keeps_single_slot() {
        let mut session = ChartSession::with_policies(
            Period::Daily,
            DedupPolicy::IgnoreExactDuplicate,
            ComparisonHistory::ReplaceLatest,
        );
        for (a, b) in [("2024-01-01", "2024-01-02"), ("2024-01-02", "2024-01-08")] {
            session.select_point(RatePoint::new(a, dec!(1300))).unwrap();
            session.select_point(RatePoint::new(b, dec!(1310))).unwrap();
        }
        assert_eq!(session.comparisons().len(), 1);
        assert_eq!(session.comparisons()[0].first.date, "2024-01-02");
    }
}
