//! Error types for slot encoding and bit-mask algebra.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while encoding appointments or combining bit masks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekbitsError {
    /// The configured granularity does not divide evenly into an hour.
    #[error("time interval must divide evenly into 60 minutes, got {minutes}")]
    InvalidInterval { minutes: u32 },

    /// An appointment ends before it starts, or does not fit within one day.
    #[error("appointment range is not encodable: {start} .. {end}")]
    InvalidAppointment {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A batch appointment begins at or before the final slot of the one
    /// preceding it. Batch encoding requires sorted, non-overlapping input.
    #[error("appointment at index {index} begins before the previous one has ended")]
    OutOfSequence { index: usize },

    /// Two bit patterns share a set bit where disjointness was required.
    /// Both operands are reported as bit strings at the configured
    /// granularity so callers can render their own conflict messages.
    #[error("time slots collide ({interval_minutes}-minute slots): {existing} vs {incoming}")]
    SlotConflict {
        existing: String,
        incoming: String,
        interval_minutes: u32,
    },

    /// A deletion targets bits that are not set in the base pattern.
    #[error("cannot clear unset time slots: {base} does not contain {to_delete}")]
    InvalidDeletion { base: String, to_delete: String },

    /// A bit string had the wrong shape: a character other than `'0'`/`'1'`,
    /// or a length that does not match the configured granularity.
    #[error("malformed bit string: {message}")]
    MalformedBitString { message: String },
}

/// Convenience alias used throughout weekbits-core.
pub type Result<T> = std::result::Result<T, WeekbitsError>;
