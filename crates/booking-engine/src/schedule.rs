//! Schedule state and the scheduler's action vocabulary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use weekbits_core::{Appointment, TimeInterval, WeekBits};

use crate::calendar::Calendar;
use crate::error::BookingError;

/// The weekly schedule of a single resource.
///
/// `schedule` is the maximal availability template per day; `bookings` is the
/// committed subset. The invariant `bookings[d] ⊆ schedule[d]` is
/// re-validated by every operation that reads both, never assumed.
///
/// The struct is mutated in place by scheduler operations, but only after a
/// whole operation has validated -- a failed call leaves it unchanged.
/// Concurrent writers must serialize externally; there is no internal
/// locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Maximal availability bit string per day, Sunday first.
    pub schedule: WeekBits,
    /// Currently committed bookings per day, Sunday first.
    pub bookings: WeekBits,
    /// UTC midnight of the Sunday beginning the week.
    pub week_start: DateTime<Utc>,
}

impl WeekSchedule {
    /// Assemble a schedule, snapping `week_start` to the Sunday UTC midnight
    /// of its week rather than trusting the caller's anchor.
    pub fn new(schedule: WeekBits, bookings: WeekBits, week_start: DateTime<Utc>) -> Self {
        Self {
            schedule,
            bookings,
            week_start: Calendar::new().week_start(&week_start),
        }
    }

    /// A schedule with a fully open template and no bookings.
    pub fn open(interval: TimeInterval, week_start: DateTime<Utc>) -> Self {
        let ones = "1".repeat(interval.slots_per_day());
        let zeros = "0".repeat(interval.slots_per_day());
        Self::new(
            std::array::from_fn(|_| ones.clone()),
            std::array::from_fn(|_| zeros.clone()),
            week_start,
        )
    }

    /// A schedule with a fully closed template and no bookings.
    pub fn closed(interval: TimeInterval, week_start: DateTime<Utc>) -> Self {
        let zeros = "0".repeat(interval.slots_per_day());
        Self::new(
            std::array::from_fn(|_| zeros.clone()),
            std::array::from_fn(|_| zeros.clone()),
            week_start,
        )
    }
}

/// The decoded, human-readable view of a [`WeekSchedule`]: appointment lists
/// per day for the template, the committed bookings, and the remaining
/// availability. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSchedule {
    pub schedule: [Vec<Appointment>; 7],
    pub bookings: [Vec<Appointment>; 7],
    pub availability: [Vec<Appointment>; 7],
    pub week_start: DateTime<Utc>,
}

/// What a scheduling request wants done with its appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Book,
    Delete,
}

impl FromStr for Action {
    type Err = BookingError;

    /// Parse an action tag. Anything other than `"book"`/`"delete"` is a
    /// hard error, never a silent no-op.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "book" => Ok(Action::Book),
            "delete" => Ok(Action::Delete),
            other => Err(BookingError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Book => write!(f, "book"),
            Action::Delete => write!(f, "delete"),
        }
    }
}
