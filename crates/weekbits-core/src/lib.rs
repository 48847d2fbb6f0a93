//! # weekbits-core
//!
//! Fixed-width bit-mask encoding and conflict algebra for weekly time slots.
//!
//! A day of availability is a string of `'0'`/`'1'` characters, one per
//! granularity interval (e.g. 288 characters at 5-minute granularity).
//! Appointments become runs of set bits; conflict detection, merging, and
//! deletion are bitwise operations over hour-sized `u64` chunks instead of
//! interval-list scans.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use weekbits_core::{Appointment, SlotEncoder, TimeInterval};
//!
//! let interval = TimeInterval::new(30).unwrap();
//! let encoder = SlotEncoder::new(interval);
//!
//! let appointment = Appointment::new(
//!     Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
//! )
//! .unwrap();
//!
//! // 48 slots per day at 30-minute granularity; 09:00 through 10:00
//! // occupies slots 18..=20 (the end slot is inclusive).
//! let day = encoder.encode_day(&appointment).unwrap();
//! assert_eq!(&day[18..21], "111");
//! assert_eq!(day.matches('1').count(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — validated granularity and derived slot counts
//! - [`pointer`] — date-time → slot-index conversion
//! - [`codec`] — appointment ↔ bit-string ↔ `u64` chunk conversion
//! - [`algebra`] — disjoint-merge conflict test, envelope fit, checked clear
//! - [`types`] — `Appointment` and the bit-string aliases
//! - [`error`] — error types

pub mod algebra;
pub mod codec;
pub mod error;
pub mod interval;
pub mod pointer;
pub mod types;

pub use algebra::ChunkAlgebra;
pub use codec::{format_chunk, parse_chunk, SlotEncoder};
pub use error::WeekbitsError;
pub use interval::TimeInterval;
pub use pointer::SlotIndexer;
pub use types::{Appointment, DayBits, WeekBits};
