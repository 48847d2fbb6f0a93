//! Scheduling granularity -- the smallest bookable unit of time.
//!
//! A [`TimeInterval`] is a number of minutes that divides evenly into an
//! hour. It fixes the width of every derived bit mask: one bit per interval,
//! `slots_per_hour` bits per hour chunk, `slots_per_day` bits per day string.
//! Hour chunks must fit an unsigned integer; at 1-minute granularity a chunk
//! is 60 bits wide, so all chunk arithmetic in this crate uses `u64`.

use crate::error::{Result, WeekbitsError};

/// A validated scheduling granularity, in minutes.
///
/// Only divisors of 60 are representable: {1, 2, 3, 4, 5, 6, 10, 12, 15, 20,
/// 30, 60}. Construction with any other value fails with
/// [`WeekbitsError::InvalidInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    minutes: u32,
}

impl TimeInterval {
    /// Validate and wrap a granularity.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::InvalidInterval`] when `minutes` is zero or
    /// does not divide 60.
    pub fn new(minutes: u32) -> Result<Self> {
        if minutes == 0 || 60 % minutes != 0 {
            return Err(WeekbitsError::InvalidInterval { minutes });
        }
        Ok(Self { minutes })
    }

    /// The granularity in minutes.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Number of slots in one hour (the width of an hour chunk).
    pub fn slots_per_hour(&self) -> usize {
        (60 / self.minutes) as usize
    }

    /// Number of slots in one day (the length of a day bit string).
    pub fn slots_per_day(&self) -> usize {
        self.slots_per_hour() * 24
    }

    /// Number of slots in one week.
    pub fn slots_per_week(&self) -> usize {
        self.slots_per_day() * 7
    }

    /// Bit mask covering exactly one hour chunk.
    ///
    /// At 1-minute granularity this is 60 set bits, which is why chunks are
    /// `u64` and never a narrower type.
    pub fn chunk_mask(&self) -> u64 {
        (1u64 << self.slots_per_hour()) - 1
    }
}
