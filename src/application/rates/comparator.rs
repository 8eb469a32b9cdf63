use crate::domain::errors::ComparisonError;
use crate::domain::rates::comparison::ComparisonRecord;
use crate::domain::rates::rate_point::RatePoint;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// How a click on a point already pending in the selection is treated.
///
/// Product iterations disagreed here: the earlier chart appended every
/// click, the later one swallowed exact re-clicks. Both behaviors are kept
/// behind this flag; `IgnoreExactDuplicate` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    #[default]
    IgnoreExactDuplicate,
    AppendAlways,
}

/// What a single point selection resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// First point of a pair recorded, waiting for the second
    Pending,
    /// Click matched a point already pending; state unchanged
    Ignored,
    /// Second point completed the pair
    Compared(ComparisonRecord),
}

/// Two-click comparison state machine.
///
/// Holds at most two pending points. The second selection emits a
/// `ComparisonRecord` (differences rounded to 2 decimal places) and resets
/// the selection unconditionally, including when the comparison itself is
/// undefined because the baseline rate is zero.
#[derive(Debug, Default)]
pub struct PointComparator {
    pending: Vec<RatePoint>,
    dedup: DedupPolicy,
}

impl PointComparator {
    pub fn new(dedup: DedupPolicy) -> Self {
        Self {
            pending: Vec::new(),
            dedup,
        }
    }

    /// Points selected so far, in click order. Never more than two, and a
    /// second point is resolved before `select` returns, so callers only
    /// ever observe zero or one.
    pub fn pending(&self) -> &[RatePoint] {
        &self.pending
    }

    /// Discards any pending selection. Called on every period change.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Handles one chart click.
    pub fn select(&mut self, point: RatePoint) -> Result<Selection, ComparisonError> {
        if self.dedup == DedupPolicy::IgnoreExactDuplicate && self.pending.contains(&point) {
            debug!(date = %point.date, "Ignoring re-click on pending point");
            return Ok(Selection::Ignored);
        }

        self.pending.push(point);
        if self.pending.len() < 2 {
            return Ok(Selection::Pending);
        }

        // Resolve and reset regardless of whether the comparison is defined
        let mut pair = std::mem::take(&mut self.pending).into_iter();
        let first = pair.next().expect("selection verified to hold two points");
        let second = pair.next().expect("selection verified to hold two points");

        if first.value.is_zero() {
            return Err(ComparisonError::ZeroBaseline { date: first.date });
        }

        let delta = second.value - first.value;
        let record = ComparisonRecord {
            absolute_difference: round2(delta),
            percent_difference: round2(delta / first.value * Decimal::ONE_HUNDRED),
            first,
            second,
        };
        Ok(Selection::Compared(record))
    }
}

/// Half-away-from-zero to 2 decimals, matching how the rates are displayed
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
