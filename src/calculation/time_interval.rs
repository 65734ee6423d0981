//! Time-interval arithmetic.
//!
//! Elapsed time between times of day (with midnight roll-over) and between
//! timestamps, expressed as decimal hours.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Returns the hours from `start` to `end` on a 24-hour clock.
///
/// When `end` is earlier than `start` the interval is taken to cross
/// midnight, so the result is never negative. Equal times give zero.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::elapsed_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let five_pm = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// assert_eq!(elapsed_hours(eight, five_pm), Decimal::from(9));
///
/// // 22:00 to 06:00 crosses midnight
/// let ten_pm = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let six_am = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(elapsed_hours(ten_pm, six_am), Decimal::from(8));
/// ```
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut seconds = (end - start).num_seconds();
    if end < start {
        seconds += SECONDS_PER_DAY;
    }
    seconds_to_hours(seconds)
}

/// Returns the signed hours between two timestamps.
///
/// # Examples
///
/// ```
/// use workforce_metrics::calculation::hours_between;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let start = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 1, 15, 10, 45, 0).unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(175, 2));
/// ```
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    seconds_to_hours((end - start).num_seconds())
}

/// Converts a number of minutes to decimal hours.
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}
