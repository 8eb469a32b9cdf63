//! Line chart of the bucketed series with two-click point selection.
//!
//! Bucket labels are strings, so plotting needs a timestamp per label and
//! the axis/tooltip need the label back from a timestamp. Both directions
//! go through `domain::rates::week` for weekly labels so the chart and the
//! aggregator always agree on week boundaries.

use crate::application::rates::session::ChartSession;
use crate::domain::rates::period::Period;
use crate::domain::rates::rate_point::RatePoint;
use crate::domain::rates::week;
use chrono::{NaiveDate, TimeZone, Utc};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, Points};
use rust_decimal::prelude::ToPrimitive;

const SERIES_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 167, 69);

/// Squared normalized distance within which a click counts as hitting a
/// point (~3% of the visible span on each axis)
const HIT_TOLERANCE_SQ: f64 = 0.0009;

/// Renders the chart and returns the point the user clicked, if any
pub fn render_chart(ui: &mut egui::Ui, session: &ChartSession) -> Option<RatePoint> {
    let period = session.period();

    let mut positions: Vec<[f64; 2]> = Vec::with_capacity(session.series().len());
    let mut plotted: Vec<&RatePoint> = Vec::with_capacity(session.series().len());
    for point in session.series() {
        let Some(ts) = axis_timestamp(period, &point.date) else {
            continue;
        };
        let Some(value) = point.value.to_f64() else {
            continue;
        };
        positions.push([ts as f64, value]);
        plotted.push(point);
    }

    let height = (ui.available_height() * 0.5).max(280.0);
    let response = Plot::new("rate_chart")
        .height(height)
        .show_grid([true, true])
        .x_axis_formatter(move |mark, _range| axis_label(period, mark.value as i64))
        .label_formatter(move |_name, value| {
            format!("{}\n{:.2}", axis_label(period, value.x as i64), value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("rate", positions.clone()).color(SERIES_COLOR));
            plot_ui.points(
                Points::new("rate_markers", positions.clone())
                    .color(SERIES_COLOR)
                    .filled(true)
                    .radius(3.0),
            );

            if plot_ui.response().clicked() {
                plot_ui
                    .pointer_coordinate()
                    .and_then(|pointer| nearest_point(&positions, pointer, plot_ui.plot_bounds()))
            } else {
                None
            }
        });

    response.inner.map(|idx| plotted[idx].clone())
}

/// Index of the plotted point closest to the pointer, if close enough.
///
/// Distances are normalized by the visible bounds so the tolerance behaves
/// the same regardless of zoom level or the magnitude of the rates.
fn nearest_point(positions: &[[f64; 2]], pointer: PlotPoint, bounds: PlotBounds) -> Option<usize> {
    let width = bounds.width().max(f64::EPSILON);
    let height = bounds.height().max(f64::EPSILON);

    positions
        .iter()
        .enumerate()
        .map(|(idx, pos)| {
            let dx = (pos[0] - pointer.x) / width;
            let dy = (pos[1] - pointer.y) / height;
            (idx, dx * dx + dy * dy)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, dist_sq)| *dist_sq <= HIT_TOLERANCE_SQ)
        .map(|(idx, _)| idx)
}

/// Reconstructs the x-axis timestamp (unix seconds, midnight UTC) for a
/// bucket label: the date itself, the week's Monday, the month's first
/// day, or January 1st.
pub fn axis_timestamp(period: Period, label: &str) -> Option<i64> {
    let date = match period {
        Period::Daily => NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()?,
        Period::Weekly => week::week_start(label)?,
        Period::Monthly => NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d").ok()?,
        Period::Yearly => NaiveDate::parse_from_str(&format!("{label}-01-01"), "%Y-%m-%d").ok()?,
    };
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp())
}

/// Formats an x-axis timestamp back into the bucket label for `period`
pub fn axis_label(period: Period, ts: i64) -> String {
    let Some(dt) = Utc.timestamp_opt(ts, 0).single() else {
        return String::new();
    };
    let date = dt.date_naive();
    match period {
        Period::Daily => date.format("%Y-%m-%d").to_string(),
        Period::Weekly => week::week_key(date),
        Period::Monthly => date.format("%Y-%m").to_string(),
        Period::Yearly => date.format("%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_timestamp_daily() {
        // 2024-01-01T00:00:00Z
        assert_eq!(
            axis_timestamp(Period::Daily, "2024-01-01"),
            Some(1_704_067_200)
        );
    }

    #[test]
    fn test_axis_timestamp_weekly_is_monday() {
        let ts = axis_timestamp(Period::Weekly, "2024-W02").unwrap();
        assert_eq!(axis_label(Period::Daily, ts), "2024-01-08");
    }

    #[test]
    fn test_axis_round_trip_per_period() {
        for (period, label) in [
            (Period::Daily, "2024-03-15"),
            (Period::Weekly, "2024-W11"),
            (Period::Monthly, "2024-03"),
            (Period::Yearly, "2024"),
        ] {
            let ts = axis_timestamp(period, label).unwrap();
            assert_eq!(axis_label(period, ts), label);
        }
    }

    #[test]
    fn test_axis_timestamp_rejects_garbage() {
        assert_eq!(axis_timestamp(Period::Daily, "not-a-date"), None);
        assert_eq!(axis_timestamp(Period::Weekly, "2024-13"), None);
        assert_eq!(axis_timestamp(Period::Monthly, "2024"), None);
    }

    #[test]
    fn test_nearest_point_hit_and_miss() {
        let positions = vec![[0.0, 0.0], [10.0, 10.0], [20.0, 0.0]];
        let bounds = PlotBounds::from_min_max([0.0, 0.0], [20.0, 10.0]);

        let hit = nearest_point(&positions, PlotPoint::new(10.1, 9.9), bounds);
        assert_eq!(hit, Some(1));

        let miss = nearest_point(&positions, PlotPoint::new(5.0, 5.0), bounds);
        assert_eq!(miss, None);
    }
}
