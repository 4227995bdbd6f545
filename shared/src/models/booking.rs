//! Booking Interval Model (reservations, blocks, conflicts)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reservation / block status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Occupied,
    Blocked,
    Maintenance,
    Cancelled,
}

impl BookingStatus {
    /// Non-cancelled intervals hold the room
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }

    /// Guest reservation (as opposed to an operational block)
    pub fn is_reservation(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Occupied)
    }

    /// Room taken out of inventory (block or maintenance)
    pub fn is_block(&self) -> bool {
        matches!(self, BookingStatus::Blocked | BookingStatus::Maintenance)
    }
}

/// Existing reservation or block on one room, half-open `[check_in, check_out)`
///
/// Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingInterval {
    #[serde(default)]
    pub id: Option<String>,
    pub room_id: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub status: BookingStatus,
    /// Channel that created it (WALK_IN, PHONE, OTA, ADMIN...)
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub guest_name: Option<String>,
}

/// Candidate bulk block, evaluated before it is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRequest {
    pub room_ids: BTreeSet<String>,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    #[serde(default)]
    pub reason: String,
}

/// Overlap between a candidate range and an existing active interval on the same room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub room_id: String,
    /// Earliest-starting overlapping interval
    pub booking_id: Option<String>,
    pub status: BookingStatus,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub source: String,
    /// Overlapping intervals on this room (at least 1)
    pub overlap_count: u32,
}
