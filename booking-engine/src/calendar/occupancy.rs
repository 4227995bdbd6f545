//! Daily occupancy counts for the calendar header

use std::collections::BTreeSet;

use shared::models::{BookingInterval, DayOccupancy};

use super::geometry::day_span;
use super::window::CalendarWindow;

/// Count occupied, blocked and available rooms for each day of the window
///
/// A room counts once per day and category even when several intervals
/// cover it. A room both reserved and blocked on the same day counts in
/// both; `available` saturates at zero.
pub fn daily_occupancy(
    window: &CalendarWindow,
    intervals: &[BookingInterval],
    total_rooms: u32,
) -> Vec<DayOccupancy> {
    let spans: Vec<_> = intervals
        .iter()
        .filter(|iv| iv.status.is_active())
        .map(|iv| (day_span(iv.check_in, iv.check_out), iv))
        .collect();

    window
        .dates()
        .map(|date| {
            let mut occupied = BTreeSet::new();
            let mut blocked = BTreeSet::new();
            for ((first, end), iv) in &spans {
                if *first > date || date >= *end {
                    continue;
                }
                if iv.status.is_reservation() {
                    occupied.insert(iv.room_id.as_str());
                } else if iv.status.is_block() {
                    blocked.insert(iv.room_id.as_str());
                }
            }
            let occupied = occupied.len() as u32;
            let blocked = blocked.len() as u32;
            DayOccupancy {
                date,
                occupied,
                blocked,
                available: total_rooms.saturating_sub(occupied).saturating_sub(blocked),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::BookingStatus;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn interval(room: &str, from: u32, to: u32, status: BookingStatus) -> BookingInterval {
        BookingInterval {
            id: None,
            room_id: room.to_string(),
            check_in: d(from).and_hms_opt(14, 0, 0).unwrap(),
            check_out: d(to).and_hms_opt(11, 0, 0).unwrap(),
            status,
            source: String::new(),
            guest_name: None,
        }
    }

    #[test]
    fn test_counts_per_day() {
        let intervals = vec![
            interval("101", 1, 3, BookingStatus::Confirmed),
            interval("102", 2, 3, BookingStatus::Occupied),
            interval("103", 2, 4, BookingStatus::Maintenance),
            interval("104", 1, 4, BookingStatus::Cancelled),
        ];
        let counts = daily_occupancy(&CalendarWindow::new(d(1), 4), &intervals, 5);

        let occupied: Vec<u32> = counts.iter().map(|c| c.occupied).collect();
        let blocked: Vec<u32> = counts.iter().map(|c| c.blocked).collect();
        let available: Vec<u32> = counts.iter().map(|c| c.available).collect();
        assert_eq!(occupied, vec![1, 2, 0, 0]);
        assert_eq!(blocked, vec![0, 1, 1, 0]);
        assert_eq!(available, vec![4, 2, 4, 5]);
    }

    #[test]
    fn test_room_counted_once() {
        let intervals = vec![
            interval("101", 1, 3, BookingStatus::Confirmed),
            interval("101", 2, 4, BookingStatus::Confirmed),
        ];
        let counts = daily_occupancy(&CalendarWindow::new(d(2), 1), &intervals, 3);
        assert_eq!(counts[0].occupied, 1);
    }

    #[test]
    fn test_same_day_stay_covers_its_day() {
        let intervals = vec![BookingInterval {
            check_out: d(5).and_hms_opt(18, 0, 0).unwrap(),
            ..interval("101", 5, 5, BookingStatus::Occupied)
        }];
        let counts = daily_occupancy(&CalendarWindow::new(d(4), 3), &intervals, 1);
        let occupied: Vec<u32> = counts.iter().map(|c| c.occupied).collect();
        assert_eq!(occupied, vec![0, 1, 0]);
    }

    #[test]
    fn test_available_saturates() {
        let intervals = vec![
            interval("101", 1, 2, BookingStatus::Confirmed),
            interval("102", 1, 2, BookingStatus::Blocked),
        ];
        let counts = daily_occupancy(&CalendarWindow::new(d(1), 1), &intervals, 1);
        assert_eq!(counts[0].available, 0);
    }
}
