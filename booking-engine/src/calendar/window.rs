//! Visible calendar window (day columns)

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use shared::models::CalendarDay;

use crate::utils::time::{add_days, days_between, is_weekend, today_in};

/// Build the day columns `start + i` for `i in 0..day_count`
///
/// `today` is injected so the result is reproducible; comparison is at day
/// granularity.
pub fn build_window(start: NaiveDate, day_count: u32, today: NaiveDate) -> Vec<CalendarDay> {
    (0..i64::from(day_count))
        .map(|i| add_days(start, i))
        .map(|date| CalendarDay {
            date,
            is_today: date == today,
            is_weekend: is_weekend(date),
        })
        .collect()
}

/// A run of `day_count` consecutive days starting at `start_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWindow {
    pub start_date: NaiveDate,
    pub day_count: u32,
}

impl CalendarWindow {
    pub fn new(start_date: NaiveDate, day_count: u32) -> Self {
        Self {
            start_date,
            day_count,
        }
    }

    /// Window of `day_count` days with `date` in the middle column
    pub fn centered_on(date: NaiveDate, day_count: u32) -> Self {
        let before = i64::from(day_count / 2);
        Self::new(add_days(date, -before), day_count)
    }

    /// Dates of the window in column order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start_date;
        (0..i64::from(self.day_count)).map(move |i| add_days(start, i))
    }

    pub fn days(&self, today: NaiveDate) -> Vec<CalendarDay> {
        build_window(self.start_date, self.day_count, today)
    }

    /// Days with "today" resolved in the business timezone
    pub fn days_in(&self, tz: Tz) -> Vec<CalendarDay> {
        self.days(today_in(tz))
    }

    /// First day after the window (exclusive bound)
    pub fn end_date(&self) -> NaiveDate {
        add_days(self.start_date, i64::from(self.day_count))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let offset = days_between(self.start_date, date);
        offset >= 0 && offset < i64::from(self.day_count)
    }

    pub fn shifted(&self, delta_days: i64) -> Self {
        Self::new(add_days(self.start_date, delta_days), self.day_count)
    }

    /// Page back by one full window
    pub fn previous(&self) -> Self {
        self.shifted(-i64::from(self.day_count))
    }

    /// Page forward by one full window
    pub fn next(&self) -> Self {
        self.shifted(i64::from(self.day_count))
    }
}
