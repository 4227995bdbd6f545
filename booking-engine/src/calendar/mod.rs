//! Interval / Date-Grid Mapper
//!
//! Pure calendar math for the availability grid: day columns, interval
//! rects, per-room lanes and daily counts.

pub mod geometry;
pub mod layout;
pub mod occupancy;
pub mod window;

pub use geometry::{day_span, position_interval};
pub use layout::{BookingBlock, GridSpec, RoomRow, layout_grid, layout_room_row};
pub use occupancy::daily_occupancy;
pub use window::{CalendarWindow, build_window};
