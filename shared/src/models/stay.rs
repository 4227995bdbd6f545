//! Stay Model

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// A guest stay between two local wall-clock instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
}

impl Stay {
    pub fn new(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Build a stay from Unix millis, converted into the business timezone
    ///
    /// Out-of-range timestamps fall back to the Unix epoch.
    pub fn from_millis(check_in_ms: i64, check_out_ms: i64, tz: Tz) -> Self {
        Self {
            check_in: millis_to_local(check_in_ms, tz),
            check_out: millis_to_local(check_out_ms, tz),
        }
    }

    /// Number of billable nights: ceil of whole days between check-in and
    /// check-out, never less than 1
    pub fn nights(&self) -> u32 {
        let seconds = (self.check_out - self.check_in).num_seconds();
        if seconds <= 0 {
            return 1;
        }
        let nights = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
        u32::try_from(nights).unwrap_or(u32::MAX).max(1)
    }
}

fn millis_to_local(millis: i64, tz: Tz) -> NaiveDateTime {
    let utc = DateTime::from_timestamp_millis(millis).unwrap_or_default();
    tz.from_utc_datetime(&utc.naive_utc()).naive_local()
}
