//! Decode layer -- bit strings back into calendar-anchored appointments.
//!
//! Scans a day string left to right: a 0→1 transition opens an appointment,
//! a 1→0 transition closes it at the previous slot's end of interval. The
//! decoded end time is one second shy of the next slot boundary so that
//! logically adjacent slots never appear to overlap in wall-clock terms.

use chrono::{DateTime, Duration, Utc};
use weekbits_core::{Appointment, TimeInterval, WeekBits, WeekbitsError};

use crate::calendar::Calendar;
use crate::error::Result;
use crate::schedule::{DecodedSchedule, WeekSchedule};

/// Bit string → appointment-list conversion at a fixed granularity.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleDecoder {
    interval: TimeInterval,
    calendar: Calendar,
}

impl ScheduleDecoder {
    pub fn new(interval: TimeInterval, calendar: Calendar) -> Self {
        Self { interval, calendar }
    }

    /// Decode one day string into its appointments, anchored to `anchor`'s
    /// day.
    ///
    /// A run still open at the end of the string closes at the last slot of
    /// the day.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::MalformedBitString`] when the string is not
    /// exactly `slots_per_day` binary digits.
    pub fn decode_day(
        &self,
        bits: &str,
        anchor: &DateTime<Utc>,
    ) -> Result<Vec<Appointment>> {
        if bits.len() != self.interval.slots_per_day() {
            return Err(WeekbitsError::MalformedBitString {
                message: format!(
                    "day string must be {} slots, got {}",
                    self.interval.slots_per_day(),
                    bits.len()
                ),
            }
            .into());
        }

        let midnight = self.calendar.midnight(anchor);
        let mut appointments = Vec::new();
        let mut run_start: Option<usize> = None;

        for (slot, byte) in bits.bytes().enumerate() {
            match byte {
                b'1' => {
                    if run_start.is_none() {
                        run_start = Some(slot);
                    }
                }
                b'0' => {
                    if let Some(start) = run_start.take() {
                        appointments.push(self.run_to_appointment(&midnight, start, slot - 1));
                    }
                }
                other => {
                    return Err(WeekbitsError::MalformedBitString {
                        message: format!("unexpected character {:?} at slot {slot}", other as char),
                    }
                    .into());
                }
            }
        }

        if let Some(start) = run_start {
            appointments.push(self.run_to_appointment(
                &midnight,
                start,
                self.interval.slots_per_day() - 1,
            ));
        }

        Ok(appointments)
    }

    /// Decode a whole schedule: template, bookings, and the supplied
    /// availability strings, each anchored to its concrete calendar date.
    pub fn decode_schedule(
        &self,
        schedule: &WeekSchedule,
        availability: &WeekBits,
    ) -> Result<DecodedSchedule> {
        let mut decoded_schedule: [Vec<Appointment>; 7] = Default::default();
        let mut decoded_bookings: [Vec<Appointment>; 7] = Default::default();
        let mut decoded_availability: [Vec<Appointment>; 7] = Default::default();

        for day in 0..7 {
            let anchor = self.calendar.date_of_day(&schedule.week_start, day);
            decoded_schedule[day] = self.decode_day(&schedule.schedule[day], &anchor)?;
            decoded_bookings[day] = self.decode_day(&schedule.bookings[day], &anchor)?;
            decoded_availability[day] = self.decode_day(&availability[day], &anchor)?;
        }

        Ok(DecodedSchedule {
            schedule: decoded_schedule,
            bookings: decoded_bookings,
            availability: decoded_availability,
            week_start: schedule.week_start,
        })
    }

    /// Convert a closed slot run into a concrete appointment.
    fn run_to_appointment(
        &self,
        midnight: &DateTime<Utc>,
        start_slot: usize,
        end_slot: usize,
    ) -> Appointment {
        let minutes = self.interval.minutes() as i64;
        let start = *midnight + Duration::minutes(start_slot as i64 * minutes);
        let end = *midnight + Duration::minutes((end_slot as i64 + 1) * minutes)
            - Duration::seconds(1);
        Appointment { start, end }
    }
}
