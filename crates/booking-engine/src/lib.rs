//! # booking-engine
//!
//! Conflict-safe weekly booking over bit-mask schedules.
//!
//! A resource's week is seven fixed-width bit strings (see `weekbits-core`):
//! an availability template and the committed bookings. The engine books and
//! deletes appointments against that state with bitwise conflict detection,
//! splits appointments that straddle midnight into per-day fragments, and
//! decodes the masks back into calendar-anchored appointment lists.
//!
//! ## Quick start
//!
//! ```rust
//! use booking_engine::{Action, Calendar, Scheduler, WeekSchedule};
//! use chrono::{TimeZone, Utc};
//! use weekbits_core::Appointment;
//!
//! let scheduler = Scheduler::new(30, Calendar::new()).unwrap();
//! let week_start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
//! let mut schedule = WeekSchedule::open(scheduler.interval(), week_start);
//!
//! let appointment = Appointment::new(
//!     Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
//! )
//! .unwrap();
//!
//! scheduler.process(&appointment, &mut schedule, Action::Book).unwrap();
//!
//! // Booking the same time again collides.
//! assert!(scheduler.process(&appointment, &mut schedule, Action::Book).is_err());
//!
//! // Deleting it frees the slots back up.
//! scheduler.process(&appointment, &mut schedule, Action::Delete).unwrap();
//! assert_eq!(schedule.bookings[1].matches('1').count(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`scheduler`] — the state machine: book/delete dispatch, midnight
//!   splitting, availability, template replacement, batch processing
//! - [`schedule`] — `WeekSchedule`, its decoded view, and the action tags
//! - [`decode`] — bit strings → calendar-anchored appointment lists
//! - [`calendar`] — injectable week/day date arithmetic
//! - [`error`] — error types

pub mod calendar;
pub mod decode;
pub mod error;
pub mod schedule;
pub mod scheduler;

pub use calendar::Calendar;
pub use decode::ScheduleDecoder;
pub use error::BookingError;
pub use schedule::{Action, DecodedSchedule, WeekSchedule};
pub use scheduler::Scheduler;
