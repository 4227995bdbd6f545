//! Calendar Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One column of the availability calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    /// Saturday or Sunday
    pub is_weekend: bool,
}

/// Horizontal placement of an interval inside the visible window (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntervalRect {
    pub left: f64,
    /// 0 when the interval lies entirely outside the window
    pub width: f64,
}

impl IntervalRect {
    pub const HIDDEN: IntervalRect = IntervalRect {
        left: 0.0,
        width: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

/// Per-day room counts for the calendar header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOccupancy {
    pub date: NaiveDate,
    /// Rooms with a CONFIRMED or OCCUPIED reservation
    pub occupied: u32,
    /// Rooms BLOCKED or under MAINTENANCE
    pub blocked: u32,
    pub available: u32,
}
