//! 时间工具函数 - 日历与业务时区
//!
//! Calendar math works on local wall-clock values (`NaiveDate` /
//! `NaiveDateTime`); only "today" depends on the business timezone.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use chrono_tz::Tz;
use shared::error::ErrorCode;

use super::{AppError, AppResult};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid date format: {}", date))
    })
}

/// 解析日期时间字符串 (YYYY-MM-DDTHH:MM[:SS], 'T' or space)
pub fn parse_datetime(value: &str) -> AppResult<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Invalid datetime format: {}", value),
            )
        })
}

/// 解析时区名称，失败回退到 UTC
pub fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!("Unknown timezone '{}': {}, falling back to UTC", name, e);
        Tz::UTC
    })
}

/// 业务时区的今天
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Drop the time of day
#[inline]
pub fn floor_to_day(value: NaiveDateTime) -> NaiveDate {
    value.date()
}

/// Signed whole days from `from` to `to`
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Saturday or Sunday
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `date + days`, saturating at the calendar bounds
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(chrono::Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(chrono::Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-10-18").unwrap(), d(2026, 10, 18));
        let err = parse_date("18/10/2026").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = d(2026, 10, 18).and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-10-18T14:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-10-18T14:30").unwrap(), expected);
        assert_eq!(parse_datetime("2026-10-18 14:30").unwrap(), expected);
        assert!(parse_datetime("2026-10-18").is_err());
    }

    #[test]
    fn test_parse_timezone_fallback() {
        assert_eq!(parse_timezone("Asia/Kolkata"), chrono_tz::Asia::Kolkata);
        assert_eq!(parse_timezone("Mars/Olympus"), Tz::UTC);
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(d(2026, 2, 27), d(2026, 3, 2)), 3);
        assert_eq!(days_between(d(2026, 3, 2), d(2026, 2, 27)), -3);
        assert_eq!(days_between(d(2026, 3, 2), d(2026, 3, 2)), 0);
    }

    #[test]
    fn test_is_weekend() {
        // 2026-10-17 is a Saturday
        assert!(is_weekend(d(2026, 10, 17)));
        assert!(is_weekend(d(2026, 10, 18)));
        assert!(!is_weekend(d(2026, 10, 19)));
        assert!(!is_weekend(d(2026, 10, 16)));
    }

    #[test]
    fn test_floor_and_add_days() {
        let dt = d(2026, 12, 31).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(floor_to_day(dt), d(2026, 12, 31));
        assert_eq!(add_days(d(2026, 12, 31), 1), d(2027, 1, 1));
        assert_eq!(add_days(d(2026, 3, 1), -1), d(2026, 2, 28));
    }
}
