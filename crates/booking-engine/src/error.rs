//! Error types for booking-engine operations.

use thiserror::Error;
use weekbits_core::WeekbitsError;

/// Errors raised while processing scheduling operations.
///
/// Codec and algebra failures pass through unchanged so callers can match on
/// the underlying category (conflict, invalid deletion, bad appointment).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// An encoding or bit-mask algebra failure.
    #[error(transparent)]
    Bits(#[from] WeekbitsError),

    /// An unrecognized action tag was supplied to the scheduler dispatch.
    #[error("unknown scheduling action: {0:?}")]
    UnknownAction(String),
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, BookingError>;
