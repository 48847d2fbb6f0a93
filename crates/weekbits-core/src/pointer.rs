//! Slot indexing -- converts calendar date-times into bit positions.
//!
//! Every date-time maps to an integer slot index: the position of its
//! granularity interval within a day, or within a whole week when the day of
//! week is folded in. Sunday is day 0, and within a day slots run
//! chronologically from 00:00.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::interval::TimeInterval;

/// Pure date-time → slot-index conversion at a fixed granularity.
#[derive(Debug, Clone, Copy)]
pub struct SlotIndexer {
    interval: TimeInterval,
}

impl SlotIndexer {
    pub fn new(interval: TimeInterval) -> Self {
        Self { interval }
    }

    /// Slot index of `time` within its own day.
    ///
    /// `hour * slots_per_hour + minute / interval`; seconds are ignored, so a
    /// time anywhere inside an interval maps to that interval's slot.
    pub fn day_slot(&self, time: &DateTime<Utc>) -> usize {
        let hour = time.hour() as usize;
        let minute = time.minute() as usize;
        hour * self.interval.slots_per_hour() + minute / self.interval.minutes() as usize
    }

    /// Slot index of `time` within a full week's bit string.
    pub fn week_slot(&self, time: &DateTime<Utc>) -> usize {
        self.day_offset(time) + self.day_slot(time)
    }

    /// The day component of [`week_slot`](Self::week_slot): the index of the
    /// first slot of `time`'s day within the week, Sunday = 0.
    pub fn day_offset(&self, time: &DateTime<Utc>) -> usize {
        time.weekday().num_days_from_sunday() as usize * self.interval.slots_per_day()
    }
}
