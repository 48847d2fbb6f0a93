//! Core exchange types shared by the codec and the scheduling engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WeekbitsError};

/// A day-length bit string: one ASCII `'0'`/`'1'` per slot, chronological
/// from 00:00.
pub type DayBits = String;

/// Seven day strings, Sunday first.
pub type WeekBits = [DayBits; 7];

/// A single appointment: a closed time range in the reference offset (UTC).
///
/// `end` is the wall-clock end of the appointment; the slot containing it is
/// occupied in full when encoded. `end >= start` is an invariant -- violations
/// are reported, never silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Appointment {
    /// Build a validated appointment.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::InvalidAppointment`] when `end < start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(WeekbitsError::InvalidAppointment { start, end });
        }
        Ok(Self { start, end })
    }

    /// Total length of the appointment in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
