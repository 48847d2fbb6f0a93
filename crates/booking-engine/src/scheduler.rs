//! The scheduling state machine.
//!
//! One action per call: the scheduler receives an appointment (or a batch)
//! and a [`WeekSchedule`], decides whether the appointment crosses a day
//! boundary, splits it if so, and drives the codec and the chunk algebra to
//! mutate the schedule's bookings or validate a template change.
//!
//! Every multi-day operation is all-or-nothing: per-day results are staged
//! and written back only after the whole operation has validated, so a
//! failing call leaves the schedule unchanged.

use log::debug;
use weekbits_core::{
    Appointment, ChunkAlgebra, DayBits, SlotEncoder, TimeInterval, WeekBits, WeekbitsError,
};

use crate::calendar::Calendar;
use crate::decode::ScheduleDecoder;
use crate::error::Result;
use crate::schedule::{Action, DecodedSchedule, WeekSchedule};

/// Orchestrates slot encoding and bit-mask algebra over a weekly schedule.
///
/// Holds its collaborators directly -- encoder, algebra, decoder, and the
/// injected [`Calendar`] -- and carries no mutable state of its own beyond
/// the configured granularity.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: TimeInterval,
    encoder: SlotEncoder,
    algebra: ChunkAlgebra,
    decoder: ScheduleDecoder,
    calendar: Calendar,
}

impl Scheduler {
    /// Build a scheduler at the given granularity.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::InvalidInterval`] when `minutes` does not
    /// divide evenly into an hour.
    pub fn new(minutes: u32, calendar: Calendar) -> Result<Self> {
        let interval = TimeInterval::new(minutes)?;
        Ok(Self {
            interval,
            encoder: SlotEncoder::new(interval),
            algebra: ChunkAlgebra::new(interval),
            decoder: ScheduleDecoder::new(interval, calendar),
            calendar,
        })
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }

    /// Whether the appointment's start and end fall on different days of the
    /// week. Appointments are assumed to cross at most one boundary;
    /// multi-day appointments are not supported.
    pub fn crosses_midnight(&self, appointment: &Appointment) -> bool {
        self.calendar.day_index(&appointment.start) != self.calendar.day_index(&appointment.end)
    }

    /// Split a midnight-crossing appointment into its two day fragments:
    /// `[start, 23:59 of start's day]` and `[00:00 of end's day, end]`.
    pub fn split_at_midnight(&self, appointment: &Appointment) -> (Appointment, Appointment) {
        let first = Appointment {
            start: appointment.start,
            end: self.calendar.last_minute_of_day(&appointment.start),
        };
        let second = Appointment {
            start: self.calendar.midnight(&appointment.end),
            end: appointment.end,
        };
        (first, second)
    }

    /// Apply one action to one appointment, splitting at midnight if needed.
    ///
    /// # Errors
    /// Propagates [`WeekbitsError::InvalidAppointment`] for inverted ranges,
    /// [`WeekbitsError::SlotConflict`] for double bookings or bookings
    /// outside the template, and [`WeekbitsError::InvalidDeletion`] for
    /// deletions of unbooked time. On error the schedule is unchanged.
    pub fn process(
        &self,
        appointment: &Appointment,
        schedule: &mut WeekSchedule,
        action: Action,
    ) -> Result<()> {
        if appointment.end < appointment.start {
            return Err(WeekbitsError::InvalidAppointment {
                start: appointment.start,
                end: appointment.end,
            }
            .into());
        }

        let fragments = if self.crosses_midnight(appointment) {
            let (first, second) = self.split_at_midnight(appointment);
            debug!(
                "appointment {} .. {} crosses midnight; splitting",
                appointment.start, appointment.end
            );
            vec![first, second]
        } else {
            vec![appointment.clone()]
        };

        match action {
            Action::Book => self.book_fragments(&fragments, schedule),
            Action::Delete => self.delete_fragments(&fragments, schedule),
        }
    }

    /// Apply one action to a pre-sorted, non-overlapping batch in a single
    /// pass over the week.
    ///
    /// The batch is encoded as one week of day masks first, then each day is
    /// validated and staged; nothing is written until all seven days pass.
    pub fn process_batch(
        &self,
        appointments: &[Appointment],
        schedule: &mut WeekSchedule,
        action: Action,
    ) -> Result<()> {
        let week = self.encoder.encode_week(appointments)?;
        let mut staged: Vec<(usize, DayBits)> = Vec::with_capacity(7);

        for (day, incoming_bits) in week.iter().enumerate() {
            let incoming = self.encoder.day_to_chunks(incoming_bits)?;
            let target = self.encoder.day_to_chunks(&schedule.bookings[day])?;
            let next = match action {
                Action::Book => {
                    let envelope = self.encoder.day_to_chunks(&schedule.schedule[day])?;
                    self.algebra.fit_and_merge(&target, &envelope, &incoming)?
                }
                Action::Delete => self.clear_day(&target, &incoming)?,
            };
            staged.push((day, self.encoder.chunks_to_day(&next)));
        }

        debug!("batch {action} of {} appointments committed", appointments.len());
        self.commit(staged, schedule);
        Ok(())
    }

    /// The remaining free time per day: template minus bookings.
    ///
    /// Re-validates the subset invariant on the way; bookings outside the
    /// template surface as [`WeekbitsError::SlotConflict`].
    pub fn availability(&self, schedule: &WeekSchedule) -> Result<WeekBits> {
        let mut free: [DayBits; 7] = Default::default();

        for day in 0..7 {
            let template = self.encoder.day_to_chunks(&schedule.schedule[day])?;
            let booked = self.encoder.day_to_chunks(&schedule.bookings[day])?;

            let free_chunks = template
                .iter()
                .zip(&booked)
                .map(|(&open, &committed)| {
                    // A booking outside the template collides with the
                    // template's complement.
                    self.algebra
                        .merge_disjoint(committed, self.algebra.complement(open))?;
                    Ok(open ^ committed)
                })
                .collect::<Result<Vec<u64>>>()?;

            free[day] = self.encoder.chunks_to_day(&free_chunks);
        }

        Ok(free)
    }

    /// Replace the weekly availability template, refusing any proposal that
    /// would orphan a committed booking.
    ///
    /// All seven days are validated before the template is swapped; bookings
    /// are left untouched.
    pub fn update_template(
        &self,
        proposed: &WeekBits,
        schedule: &mut WeekSchedule,
    ) -> Result<()> {
        for day in 0..7 {
            let proposed_chunks = self.encoder.day_to_chunks(&proposed[day])?;
            let booked = self.encoder.day_to_chunks(&schedule.bookings[day])?;

            for (&committed, &open) in booked.iter().zip(&proposed_chunks) {
                self.algebra
                    .merge_disjoint(committed, self.algebra.complement(open))?;
            }
        }

        debug!("availability template replaced");
        schedule.schedule = proposed.clone();
        Ok(())
    }

    /// Decode the schedule into appointment lists: template, bookings, and
    /// current availability, anchored to the week's concrete dates.
    pub fn decode(&self, schedule: &WeekSchedule) -> Result<DecodedSchedule> {
        let availability = self.availability(schedule)?;
        self.decoder.decode_schedule(schedule, &availability)
    }

    /// The first free slot at least `min_duration_minutes` long, scanning
    /// the week chronologically.
    pub fn first_free_slot(
        &self,
        schedule: &WeekSchedule,
        min_duration_minutes: i64,
    ) -> Result<Option<Appointment>> {
        let availability = self.availability(schedule)?;

        for (day, bits) in availability.iter().enumerate() {
            let anchor = self.calendar.date_of_day(&schedule.week_start, day);
            for slot in self.decoder.decode_day(bits, &anchor)? {
                // Decoded ends are one second shy of the slot boundary.
                let seconds = (slot.end - slot.start).num_seconds() + 1;
                if seconds >= min_duration_minutes * 60 {
                    return Ok(Some(slot));
                }
            }
        }

        Ok(None)
    }

    /// Book every fragment, staging per-day results and committing only
    /// after all fragments validate.
    fn book_fragments(
        &self,
        fragments: &[Appointment],
        schedule: &mut WeekSchedule,
    ) -> Result<()> {
        let mut staged: Vec<(usize, DayBits)> = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            let day = self.calendar.day_index(&fragment.start);
            let incoming = self.encoder.day_to_chunks(&self.encoder.encode_day(fragment)?)?;
            let target = self.encoder.day_to_chunks(&schedule.bookings[day])?;
            let envelope = self.encoder.day_to_chunks(&schedule.schedule[day])?;

            let merged = self.algebra.fit_and_merge(&target, &envelope, &incoming)?;
            staged.push((day, self.encoder.chunks_to_day(&merged)));
            debug!("booked {} .. {} on day {day}", fragment.start, fragment.end);
        }

        self.commit(staged, schedule);
        Ok(())
    }

    /// Delete every fragment, with the same staged commit discipline.
    fn delete_fragments(
        &self,
        fragments: &[Appointment],
        schedule: &mut WeekSchedule,
    ) -> Result<()> {
        let mut staged: Vec<(usize, DayBits)> = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            let day = self.calendar.day_index(&fragment.start);
            let incoming = self.encoder.day_to_chunks(&self.encoder.encode_day(fragment)?)?;
            let target = self.encoder.day_to_chunks(&schedule.bookings[day])?;

            let cleared = self.clear_day(&target, &incoming)?;
            staged.push((day, self.encoder.chunks_to_day(&cleared)));
            debug!("deleted {} .. {} on day {day}", fragment.start, fragment.end);
        }

        self.commit(staged, schedule);
        Ok(())
    }

    /// Clear a day's deletion chunks out of its booking chunks, failing on
    /// the first chunk whose bits are not all currently booked.
    fn clear_day(&self, booked: &[u64], to_delete: &[u64]) -> Result<Vec<u64>> {
        booked
            .iter()
            .zip(to_delete)
            .map(|(&base, &bits)| Ok(self.algebra.clear(base, bits)?))
            .collect()
    }

    /// Write staged per-day booking strings into the schedule.
    fn commit(&self, staged: Vec<(usize, DayBits)>, schedule: &mut WeekSchedule) {
        for (day, bits) in staged {
            schedule.bookings[day] = bits;
        }
    }
}
