//! Calendar date service -- week anchoring and day-of-week arithmetic.
//!
//! A [`Calendar`] value is passed explicitly into the scheduler and the
//! decoder at construction. It owns no state; it exists so that every piece
//! of date arithmetic (week start, day index, midnight) goes through one
//! injectable seam instead of a global utility.
//!
//! Weeks start on Sunday, day index 0. All date-times are in the single
//! reference offset (UTC) and are assumed pre-normalized by the caller.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// Stateless calendar arithmetic over UTC date-times.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calendar;

impl Calendar {
    pub fn new() -> Self {
        Self
    }

    /// Day-of-week index of `time`, Sunday = 0 .. Saturday = 6.
    pub fn day_index(&self, time: &DateTime<Utc>) -> usize {
        time.weekday().num_days_from_sunday() as usize
    }

    /// Midnight (00:00:00) of `time`'s own day.
    pub fn midnight(&self, time: &DateTime<Utc>) -> DateTime<Utc> {
        time.date_naive().and_time(NaiveTime::MIN).and_utc()
    }

    /// UTC midnight of the Sunday beginning `time`'s week.
    pub fn week_start(&self, time: &DateTime<Utc>) -> DateTime<Utc> {
        self.midnight(time) - Duration::days(self.day_index(time) as i64)
    }

    /// 23:59:00 of `time`'s own day -- the final schedulable minute, which
    /// maps to the last slot of the day at every granularity.
    pub fn last_minute_of_day(&self, time: &DateTime<Utc>) -> DateTime<Utc> {
        self.midnight(time) + Duration::days(1) - Duration::minutes(1)
    }

    /// Midnight of day `day` (0-based) in the week anchored at `week_start`.
    /// Ordinary calendar arithmetic: rolls across month and year boundaries.
    pub fn date_of_day(&self, week_start: &DateTime<Utc>, day: usize) -> DateTime<Utc> {
        *week_start + Duration::days(day as i64)
    }
}
