//! Bit-string codec -- appointments to day masks and back to integers.
//!
//! A day is `slots_per_day` ASCII `'0'`/`'1'` characters. The encoder writes
//! a `'1'` for every slot an appointment touches, **inclusive** of the slot
//! containing its end time: an appointment ending inside slot *i* occupies
//! bit *i*, so appointments reaching exactly to the end of a day occupy the
//! day's last bit.
//!
//! For bitwise processing a day string is cut into 24 hour chunks of
//! `slots_per_hour` characters each, and every chunk is read as an unsigned
//! integer. Chunks are up to 60 bits wide (1-minute granularity), so the
//! integer side of the codec is `u64` throughout.

use crate::error::{Result, WeekbitsError};
use crate::interval::TimeInterval;
use crate::pointer::SlotIndexer;
use crate::types::{Appointment, DayBits, WeekBits};

/// Interpret a binary-digit chunk as an unsigned integer.
///
/// # Errors
/// Returns [`WeekbitsError::MalformedBitString`] when the chunk is empty or
/// contains a character other than `'0'`/`'1'`.
pub fn parse_chunk(chunk: &str) -> Result<u64> {
    u64::from_str_radix(chunk, 2).map_err(|_| WeekbitsError::MalformedBitString {
        message: format!("expected binary digits, got {chunk:?}"),
    })
}

/// Inverse of [`parse_chunk`]: render `value` left-zero-padded to `width`
/// binary digits.
pub fn format_chunk(value: u64, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Appointment → bit-string encoder at a fixed granularity.
#[derive(Debug, Clone, Copy)]
pub struct SlotEncoder {
    interval: TimeInterval,
    indexer: SlotIndexer,
}

impl SlotEncoder {
    pub fn new(interval: TimeInterval) -> Self {
        Self {
            interval,
            indexer: SlotIndexer::new(interval),
        }
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }

    /// Encode a single-day appointment as a day-length bit string.
    ///
    /// The range must lie within one day; callers split midnight-crossing
    /// appointments into fragments first.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::InvalidAppointment`] when `end < start` or
    /// when the end slot precedes the start slot (the range left the day).
    pub fn encode_day(&self, appointment: &Appointment) -> Result<DayBits> {
        if appointment.end < appointment.start {
            return Err(WeekbitsError::InvalidAppointment {
                start: appointment.start,
                end: appointment.end,
            });
        }

        let start = self.indexer.day_slot(&appointment.start);
        let end = self.indexer.day_slot(&appointment.end);
        if end < start {
            return Err(WeekbitsError::InvalidAppointment {
                start: appointment.start,
                end: appointment.end,
            });
        }

        let mut bits = String::with_capacity(self.interval.slots_per_day());
        bits.push_str(&"0".repeat(start));
        bits.push_str(&"1".repeat(end - start + 1));
        bits.push_str(&"0".repeat(self.interval.slots_per_day() - end - 1));
        Ok(bits)
    }

    /// Encode a whole week of appointments in one pass.
    ///
    /// The input must be sorted by start time and non-overlapping across the
    /// week; appointments may cross a day boundary. The composed week string
    /// is zero-padded to full length and returned as seven day strings,
    /// Sunday first.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::InvalidAppointment`] for an individual bad
    /// range and [`WeekbitsError::OutOfSequence`] when an appointment starts
    /// at or before the final slot of its predecessor.
    pub fn encode_week(&self, appointments: &[Appointment]) -> Result<WeekBits> {
        let mut week = String::with_capacity(self.interval.slots_per_week());

        for (index, appointment) in appointments.iter().enumerate() {
            if appointment.end < appointment.start {
                return Err(WeekbitsError::InvalidAppointment {
                    start: appointment.start,
                    end: appointment.end,
                });
            }

            let start = self.indexer.week_slot(&appointment.start);
            let end = self.indexer.week_slot(&appointment.end);
            if end < start {
                // Saturday → Sunday wrap-around cannot be expressed in a
                // single week string.
                return Err(WeekbitsError::InvalidAppointment {
                    start: appointment.start,
                    end: appointment.end,
                });
            }

            // The cursor sits one past the previous appointment's last slot.
            if start < week.len() {
                return Err(WeekbitsError::OutOfSequence { index });
            }

            week.push_str(&"0".repeat(start - week.len()));
            week.push_str(&"1".repeat(end - start + 1));
        }

        week.push_str(&"0".repeat(self.interval.slots_per_week() - week.len()));
        Ok(self.split_week(&week))
    }

    /// Cut a day string into its 24 in-order hour chunks.
    pub fn hour_chunks(&self, day: &str) -> Vec<String> {
        day.as_bytes()
            .chunks(self.interval.slots_per_hour())
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect()
    }

    /// Parse a full day string into its 24 hour-chunk integers.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::MalformedBitString`] when the string is not
    /// exactly `slots_per_day` binary digits.
    pub fn day_to_chunks(&self, day: &str) -> Result<Vec<u64>> {
        if day.len() != self.interval.slots_per_day() {
            return Err(WeekbitsError::MalformedBitString {
                message: format!(
                    "day string must be {} slots, got {}",
                    self.interval.slots_per_day(),
                    day.len()
                ),
            });
        }
        self.hour_chunks(day)
            .iter()
            .map(|chunk| parse_chunk(chunk))
            .collect()
    }

    /// Inverse of [`day_to_chunks`](Self::day_to_chunks): render hour-chunk
    /// integers back into one day string.
    pub fn chunks_to_day(&self, chunks: &[u64]) -> DayBits {
        let width = self.interval.slots_per_hour();
        chunks
            .iter()
            .map(|&chunk| format_chunk(chunk, width))
            .collect()
    }

    /// Cut a full-length week string into seven day strings.
    fn split_week(&self, week: &str) -> WeekBits {
        let per_day = self.interval.slots_per_day();
        std::array::from_fn(|day| week[day * per_day..(day + 1) * per_day].to_string())
    }
}
