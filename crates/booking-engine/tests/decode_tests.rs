//! Tests for the decode layer and the exchange-shape serialization.

use booking_engine::{
    Action, BookingError, Calendar, ScheduleDecoder, Scheduler, WeekSchedule,
};
use chrono::{DateTime, TimeZone, Utc};
use weekbits_core::{Appointment, TimeInterval, WeekbitsError};

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1 + day, hour, minute, 0).unwrap()
}

fn decoder(minutes: u32) -> ScheduleDecoder {
    ScheduleDecoder::new(TimeInterval::new(minutes).unwrap(), Calendar::new())
}

#[test]
fn an_all_zero_day_decodes_to_no_appointments() {
    let decoded = decoder(5).decode_day(&"0".repeat(288), &at(0, 0, 0)).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn a_single_run_decodes_with_an_inclusive_end() {
    // Slots 4..=7 at 5-minute granularity: 00:20 through the end of the
    // 00:35 slot.
    let mut day = "0".repeat(288);
    day.replace_range(4..8, "1111");

    let decoded = decoder(5).decode_day(&day, &at(0, 0, 0)).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].start, at(0, 0, 20));
    assert_eq!(
        decoded[0].end,
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 39, 59).unwrap(),
        "decoded end stops one second shy of the next slot"
    );
}

#[test]
fn adjacent_runs_never_overlap_in_wall_clock_terms() {
    let mut day = "0".repeat(288);
    day.replace_range(4..8, "1111");
    day.replace_range(9..12, "111");

    let decoded = decoder(5).decode_day(&day, &at(0, 0, 0)).unwrap();
    assert_eq!(decoded.len(), 2);
    assert!(decoded[0].end < decoded[1].start);
}

#[test]
fn a_run_reaching_the_end_of_the_string_closes_at_end_of_day() {
    let mut day = "0".repeat(48);
    day.replace_range(46..48, "11");

    let decoded = decoder(30).decode_day(&day, &at(0, 0, 0)).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].start, at(0, 23, 0));
    assert_eq!(
        decoded[0].end,
        Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap()
    );
}

#[test]
fn a_full_day_decodes_to_one_appointment() {
    let decoded = decoder(30).decode_day(&"1".repeat(48), &at(0, 0, 0)).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].start, at(0, 0, 0));
    assert_eq!(decoded[0].duration_minutes(), 24 * 60 - 1);
}

#[test]
fn malformed_day_strings_are_rejected() {
    let decoder = decoder(30);

    assert!(matches!(
        decoder.decode_day("01", &at(0, 0, 0)),
        Err(BookingError::Bits(WeekbitsError::MalformedBitString { .. }))
    ));

    let mut bad_char = "0".repeat(48);
    bad_char.replace_range(10..11, "x");
    assert!(matches!(
        decoder.decode_day(&bad_char, &at(0, 0, 0)),
        Err(BookingError::Bits(WeekbitsError::MalformedBitString { .. }))
    ));
}

#[test]
fn encode_then_decode_reconstructs_the_appointment_at_slot_granularity() {
    let scheduler = Scheduler::new(15, Calendar::new()).unwrap();
    let mut schedule = WeekSchedule::open(scheduler.interval(), at(0, 0, 0));

    let booked = Appointment::new(at(2, 9, 0), at(2, 10, 25)).unwrap();
    scheduler.process(&booked, &mut schedule, Action::Book).unwrap();

    let decoded = scheduler.decode(&schedule).unwrap();
    let tuesday = &decoded.bookings[2];
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].start, at(2, 9, 0));
    // 10:25 falls inside the 10:15-10:29 slot, so the decoded end is
    // 10:29:59.
    assert_eq!(
        tuesday[0].end,
        Utc.with_ymd_and_hms(2026, 3, 3, 10, 29, 59).unwrap()
    );
}

#[test]
fn decoded_schedule_covers_template_bookings_and_availability() {
    let scheduler = Scheduler::new(30, Calendar::new()).unwrap();
    let mut schedule = WeekSchedule::open(scheduler.interval(), at(0, 0, 0));
    scheduler
        .process(
            &Appointment::new(at(1, 9, 0), at(1, 10, 0)).unwrap(),
            &mut schedule,
            Action::Book,
        )
        .unwrap();

    let decoded = scheduler.decode(&schedule).unwrap();

    assert_eq!(decoded.week_start, at(0, 0, 0));
    assert_eq!(decoded.schedule[1].len(), 1, "open template is one full-day run");
    assert_eq!(decoded.bookings[1].len(), 1);
    assert_eq!(
        decoded.availability[1].len(),
        2,
        "the booking cuts the free day into two runs"
    );
    assert!(decoded.bookings[0].is_empty());
    assert_eq!(decoded.availability[0].len(), 1);
}

#[test]
fn decoded_days_advance_across_a_month_boundary() {
    // Week of Sunday 2026-08-30: Tuesday is already September 1st.
    let week_start = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
    let scheduler = Scheduler::new(60, Calendar::new()).unwrap();
    let mut schedule = WeekSchedule::open(scheduler.interval(), week_start);

    let tuesday_meeting = Appointment::new(
        Utc.with_ymd_and_hms(2026, 9, 1, 14, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 9, 1, 14, 59, 0).unwrap(),
    )
    .unwrap();
    scheduler.process(&tuesday_meeting, &mut schedule, Action::Book).unwrap();

    let decoded = scheduler.decode(&schedule).unwrap();
    assert_eq!(
        decoded.bookings[2][0].start,
        Utc.with_ymd_and_hms(2026, 9, 1, 14, 0, 0).unwrap()
    );
}

#[test]
fn decoded_days_advance_across_a_year_boundary() {
    // Week of Sunday 2026-12-27: Friday is 2027-01-01.
    let week_start = Utc.with_ymd_and_hms(2026, 12, 27, 0, 0, 0).unwrap();
    let interval = TimeInterval::new(60).unwrap();
    let schedule = WeekSchedule::open(interval, week_start);
    let decoder = ScheduleDecoder::new(interval, Calendar::new());

    let scheduler = Scheduler::new(60, Calendar::new()).unwrap();
    let availability = scheduler.availability(&schedule).unwrap();
    let decoded = decoder.decode_schedule(&schedule, &availability).unwrap();

    assert_eq!(
        decoded.schedule[5][0].start,
        Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap(),
        "day 5 of the week is New Year's Day"
    );
}

#[test]
fn week_start_is_snapped_to_sunday_midnight() {
    let interval = TimeInterval::new(30).unwrap();
    // A Wednesday afternoon anchor still yields the Sunday of that week.
    let midweek = Utc.with_ymd_and_hms(2026, 3, 4, 15, 45, 0).unwrap();
    let schedule = WeekSchedule::open(interval, midweek);
    assert_eq!(schedule.week_start, at(0, 0, 0));
}

#[test]
fn week_schedule_round_trips_through_json() {
    let interval = TimeInterval::new(30).unwrap();
    let scheduler = Scheduler::new(30, Calendar::new()).unwrap();
    let mut schedule = WeekSchedule::open(interval, at(0, 0, 0));
    scheduler
        .process(
            &Appointment::new(at(1, 9, 0), at(1, 10, 0)).unwrap(),
            &mut schedule,
            Action::Book,
        )
        .unwrap();

    let json = serde_json::to_string(&schedule).unwrap();
    let back: WeekSchedule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, schedule);
}

#[test]
fn action_tags_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Action::Book).unwrap(), "\"book\"");
    assert_eq!(serde_json::to_string(&Action::Delete).unwrap(), "\"delete\"");
    let parsed: Action = serde_json::from_str("\"delete\"").unwrap();
    assert_eq!(parsed, Action::Delete);
}

#[test]
fn decoded_schedule_serializes() {
    let scheduler = Scheduler::new(60, Calendar::new()).unwrap();
    let schedule = WeekSchedule::open(scheduler.interval(), at(0, 0, 0));
    let decoded = scheduler.decode(&schedule).unwrap();

    let json = serde_json::to_string(&decoded).unwrap();
    assert!(json.contains("availability"));
    assert!(json.contains("week_start"));
}
