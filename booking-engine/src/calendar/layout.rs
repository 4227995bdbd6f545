//! Room row layout for the availability grid
//!
//! Each room is one row; every active interval becomes a block positioned by
//! [`position_interval`]. Blocks whose day ranges overlap are stacked on
//! separate lanes so none is drawn on top of another.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{BookingInterval, BookingStatus};

use super::geometry::{day_span, position_interval};

/// Grid geometry shared by every row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub window_start: NaiveDate,
    pub total_days: u32,
    /// Pixel width of one day cell
    pub cell_width: f64,
}

/// One visible interval in a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingBlock {
    pub booking_id: Option<String>,
    pub room_id: String,
    pub status: BookingStatus,
    pub left: f64,
    pub width: f64,
    /// 0-based lane inside the row
    pub lane: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRow {
    pub room_id: String,
    pub blocks: Vec<BookingBlock>,
    /// Lanes used (0 for an empty row)
    pub lane_count: u32,
}

/// Lay out one room's intervals
///
/// Intervals of other rooms, cancelled ones and ones outside the window are
/// skipped. Lanes are assigned greedily by start day, then id: a block takes
/// the first lane whose last block ended on or before its start day.
pub fn layout_room_row(room_id: &str, intervals: &[BookingInterval], grid: &GridSpec) -> RoomRow {
    let mut visible: Vec<(NaiveDate, NaiveDate, &BookingInterval, f64, f64)> = intervals
        .iter()
        .filter(|iv| iv.room_id == room_id && iv.status.is_active())
        .filter_map(|iv| {
            let rect = position_interval(
                iv.check_in,
                iv.check_out,
                grid.window_start,
                grid.cell_width,
                grid.total_days,
            );
            if !rect.is_visible() {
                return None;
            }
            let (first, end) = day_span(iv.check_in, iv.check_out);
            Some((first, end, iv, rect.left, rect.width))
        })
        .collect();

    visible.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.id.cmp(&b.2.id)));

    // end day of the last block on each lane
    let mut lane_ends: Vec<NaiveDate> = Vec::new();
    let mut blocks = Vec::with_capacity(visible.len());
    for (first, end, iv, left, width) in visible {
        let lane = match lane_ends.iter().position(|lane_end| *lane_end <= first) {
            Some(free) => {
                lane_ends[free] = end;
                free
            }
            None => {
                lane_ends.push(end);
                lane_ends.len() - 1
            }
        };
        blocks.push(BookingBlock {
            booking_id: iv.id.clone(),
            room_id: iv.room_id.clone(),
            status: iv.status,
            left,
            width,
            lane: lane as u32,
        });
    }

    if lane_ends.len() > 1 {
        tracing::debug!(room_id, lanes = lane_ends.len(), "Overlapping intervals stacked");
    }

    RoomRow {
        room_id: room_id.to_string(),
        blocks,
        lane_count: lane_ends.len() as u32,
    }
}

/// Lay out every room, one row per id in the given order
pub fn layout_grid<S: AsRef<str>>(
    room_ids: &[S],
    intervals: &[BookingInterval],
    grid: &GridSpec,
) -> Vec<RoomRow> {
    room_ids
        .iter()
        .map(|room_id| layout_room_row(room_id.as_ref(), intervals, grid))
        .collect()
}
