//! Conflict Detector
//!
//! Advisory overlap checks between a candidate range and existing
//! reservations / blocks. Nothing here forbids an operation; callers get the
//! full picture and decide.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::models::{BlockRequest, BookingInterval, Conflict};

/// Half-open overlap: `[a1, a2)` and `[b1, b2)` share at least one instant
///
/// Checkout at the exact instant of the next check-in is not an overlap.
#[inline]
pub fn overlaps(
    a1: NaiveDateTime,
    a2: NaiveDateTime,
    b1: NaiveDateTime,
    b2: NaiveDateTime,
) -> bool {
    a1 < b2 && b1 < a2
}

/// Check a candidate (rooms + range) against existing intervals
///
/// One [`Conflict`] per colliding room, ordered by room id. The reported
/// interval is the earliest-starting overlap; `overlap_count` says how many
/// there are. An empty or inverted candidate range overlaps nothing.
pub fn find_conflicts(candidate: &BlockRequest, existing: &[BookingInterval]) -> Vec<Conflict> {
    find_room_conflicts(
        candidate.room_ids.iter().map(String::as_str),
        candidate.check_in,
        candidate.check_out,
        existing,
    )
}

/// [`find_conflicts`] over any set of room ids
pub fn find_room_conflicts<'a, I>(
    room_ids: I,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    existing: &[BookingInterval],
) -> Vec<Conflict>
where
    I: IntoIterator<Item = &'a str>,
{
    if check_in >= check_out {
        tracing::warn!(%check_in, %check_out, "Empty or inverted candidate range, nothing can overlap");
        return Vec::new();
    }

    let mut by_room: BTreeMap<&str, Option<Conflict>> =
        room_ids.into_iter().map(|id| (id, None)).collect();

    for interval in existing {
        if !interval.status.is_active()
            || !overlaps(check_in, check_out, interval.check_in, interval.check_out)
        {
            continue;
        }
        let Some(slot) = by_room.get_mut(interval.room_id.as_str()) else {
            continue;
        };
        match slot {
            Some(conflict) => {
                conflict.overlap_count += 1;
                if interval.check_in < conflict.check_in {
                    let count = conflict.overlap_count;
                    *conflict = Conflict {
                        overlap_count: count,
                        ..conflict_from(interval)
                    };
                }
            }
            None => *slot = Some(conflict_from(interval)),
        }
    }

    let conflicts: Vec<Conflict> = by_room.into_values().flatten().collect();
    if !conflicts.is_empty() {
        tracing::debug!(count = conflicts.len(), "Conflicts detected");
    }
    conflicts
}

fn conflict_from(interval: &BookingInterval) -> Conflict {
    Conflict {
        room_id: interval.room_id.clone(),
        booking_id: interval.id.clone(),
        status: interval.status,
        check_in: interval.check_in,
        check_out: interval.check_out,
        source: interval.source.clone(),
        overlap_count: 1,
    }
}

/// Result of checking a bulk block against the current calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockEvaluation {
    pub conflicts: Vec<Conflict>,
    /// Requested rooms with no overlap, ordered by id
    pub clear_room_ids: Vec<String>,
}

impl BlockEvaluation {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Evaluate a bulk block request; advisory only
pub fn evaluate_block_request(
    request: &BlockRequest,
    existing: &[BookingInterval],
) -> BlockEvaluation {
    let conflicts = find_conflicts(request, existing);
    let clear_room_ids = request
        .room_ids
        .iter()
        .filter(|id| !conflicts.iter().any(|c| &c.room_id == *id))
        .cloned()
        .collect();

    tracing::info!(
        rooms = request.room_ids.len(),
        conflicts = conflicts.len(),
        reason = %request.reason,
        "Block request evaluated"
    );

    BlockEvaluation {
        conflicts,
        clear_room_ids,
    }
}

/// Two active intervals on the same room that overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleBooking {
    /// Index into the input slice
    pub first: usize,
    pub second: usize,
}

/// Report every overlapping pair of active intervals on the same room
///
/// Pairs come back with `first < second`, in input order.
pub fn find_double_bookings(existing: &[BookingInterval]) -> Vec<DoubleBooking> {
    let mut by_room: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, interval) in existing.iter().enumerate() {
        if interval.status.is_active() && interval.check_in < interval.check_out {
            by_room.entry(interval.room_id.as_str()).or_default().push(idx);
        }
    }

    let mut pairs = Vec::new();
    for indices in by_room.values() {
        for (pos, &i) in indices.iter().enumerate() {
            for &j in &indices[pos + 1..] {
                let (a, b) = (&existing[i], &existing[j]);
                if overlaps(a.check_in, a.check_out, b.check_in, b.check_out) {
                    pairs.push(DoubleBooking { first: i, second: j });
                }
            }
        }
    }
    pairs.sort_by_key(|p| (p.first, p.second));

    if !pairs.is_empty() {
        tracing::warn!(count = pairs.len(), "Double bookings found");
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::BookingStatus;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn interval(
        id: &str,
        room: &str,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        status: BookingStatus,
    ) -> BookingInterval {
        BookingInterval {
            id: Some(id.to_string()),
            room_id: room.to_string(),
            check_in,
            check_out,
            status,
            source: "PHONE".to_string(),
            guest_name: None,
        }
    }

    #[test]
    fn test_back_to_back_is_not_a_conflict() {
        let existing = vec![interval("r1", "101", at(1, 14, 0), at(3, 11, 0), BookingStatus::Confirmed)];
        let conflicts = find_room_conflicts(["101"], at(3, 11, 0), at(5, 11, 0), &existing);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_one_minute_overlap_is_a_conflict() {
        let existing = vec![interval("r1", "101", at(1, 14, 0), at(3, 11, 1), BookingStatus::Confirmed)];
        let conflicts = find_room_conflicts(["101"], at(3, 11, 0), at(5, 11, 0), &existing);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].booking_id.as_deref(), Some("r1"));
        assert_eq!(conflicts[0].status, BookingStatus::Confirmed);
        assert_eq!(conflicts[0].source, "PHONE");
    }

    #[test]
    fn test_cancelled_never_conflicts() {
        let existing = vec![interval("r1", "101", at(1, 14, 0), at(9, 11, 0), BookingStatus::Cancelled)];
        assert!(find_room_conflicts(["101"], at(2, 14, 0), at(4, 11, 0), &existing).is_empty());
    }

    #[test]
    fn test_blocks_and_maintenance_conflict() {
        let existing = vec![
            interval("b1", "101", at(2, 0, 0), at(4, 0, 0), BookingStatus::Blocked),
            interval("m1", "102", at(2, 0, 0), at(4, 0, 0), BookingStatus::Maintenance),
            interval("o1", "103", at(1, 14, 0), at(6, 11, 0), BookingStatus::Occupied),
        ];
        let conflicts = find_room_conflicts(["103", "101", "102"], at(3, 14, 0), at(5, 11, 0), &existing);
        let rooms: Vec<&str> = conflicts.iter().map(|c| c.room_id.as_str()).collect();
        assert_eq!(rooms, vec!["101", "102", "103"]);
    }

    #[test]
    fn test_reports_earliest_overlap_and_count() {
        let existing = vec![
            interval("late", "101", at(4, 14, 0), at(6, 11, 0), BookingStatus::Confirmed),
            interval("early", "101", at(1, 14, 0), at(3, 11, 0), BookingStatus::Occupied),
            interval("other", "202", at(1, 14, 0), at(9, 11, 0), BookingStatus::Confirmed),
        ];
        let conflicts = find_room_conflicts(["101"], at(2, 14, 0), at(5, 11, 0), &existing);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].booking_id.as_deref(), Some("early"));
        assert_eq!(conflicts[0].status, BookingStatus::Occupied);
        assert_eq!(conflicts[0].overlap_count, 2);
    }

    #[test]
    fn test_inverted_candidate_has_no_conflicts() {
        let existing = vec![interval("r1", "101", at(1, 14, 0), at(9, 11, 0), BookingStatus::Confirmed)];
        assert!(find_room_conflicts(["101"], at(5, 11, 0), at(3, 11, 0), &existing).is_empty());
        assert!(find_room_conflicts(["101"], at(3, 11, 0), at(3, 11, 0), &existing).is_empty());
    }

    #[test]
    fn test_evaluate_block_request() {
        let existing = vec![interval("r1", "102", at(1, 14, 0), at(3, 11, 0), BookingStatus::Confirmed)];
        let request = BlockRequest {
            room_ids: ["101", "102", "103"].into_iter().map(String::from).collect(),
            check_in: at(2, 0, 0),
            check_out: at(4, 0, 0),
            reason: "Deep cleaning".to_string(),
        };
        let eval = evaluate_block_request(&request, &existing);
        assert!(eval.has_conflicts());
        assert_eq!(eval.conflicts[0].room_id, "102");
        assert_eq!(eval.clear_room_ids, vec!["101".to_string(), "103".to_string()]);
    }

    #[test]
    fn test_find_double_bookings() {
        let existing = vec![
            interval("a", "101", at(1, 14, 0), at(3, 11, 0), BookingStatus::Confirmed),
            interval("b", "102", at(1, 14, 0), at(3, 11, 0), BookingStatus::Confirmed),
            interval("c", "101", at(3, 11, 0), at(4, 11, 0), BookingStatus::Confirmed),
            interval("d", "101", at(2, 14, 0), at(5, 11, 0), BookingStatus::Blocked),
            interval("e", "101", at(1, 0, 0), at(9, 0, 0), BookingStatus::Cancelled),
        ];
        let pairs = find_double_bookings(&existing);
        assert_eq!(
            pairs,
            vec![
                DoubleBooking { first: 0, second: 3 },
                DoubleBooking { first: 2, second: 3 },
            ]
        );
    }
}
