//! Interval geometry: booking date range -> horizontal rect in the grid

use chrono::{NaiveDate, NaiveDateTime};
use shared::models::IntervalRect;

use crate::utils::time::{add_days, days_between, floor_to_day};

/// Day cells covered by `[check_in, check_out)`: `[first, end)`, at least one day
pub fn day_span(check_in: NaiveDateTime, check_out: NaiveDateTime) -> (NaiveDate, NaiveDate) {
    let first = floor_to_day(check_in);
    let end = floor_to_day(check_out).max(add_days(first, 1));
    (first, end)
}

/// Position `[check_in, check_out)` inside a window of `total_days` cells
///
/// Both ends are floored to the day; a stay shorter than a day still takes
/// one cell. The rect is clipped to `[0, total_days * cell_width]`; an
/// interval entirely outside the window comes back as [`IntervalRect::HIDDEN`].
pub fn position_interval(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    window_start: NaiveDate,
    cell_width: f64,
    total_days: u32,
) -> IntervalRect {
    if !cell_width.is_finite() || cell_width <= 0.0 {
        return IntervalRect::HIDDEN;
    }

    let start_day = floor_to_day(check_in);
    let start_offset_days = days_between(window_start, start_day);
    let span_days = days_between(start_day, floor_to_day(check_out)).max(1);

    let raw_left = start_offset_days as f64 * cell_width;
    let raw_width = span_days as f64 * cell_width;

    let left = raw_left.max(0.0);
    let right = (raw_left + raw_width).min(f64::from(total_days) * cell_width);
    let width = right - left;

    if width <= 0.0 {
        return IntervalRect::HIDDEN;
    }
    IntervalRect { left, width }
}
