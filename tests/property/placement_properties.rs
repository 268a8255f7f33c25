// Property-based tests for appointment placement and view transitions
// Random appointments and dates check the mapping invariants hold everywhere

use barbershop_calendar::calendar::controller::{CalendarHost, ViewController};
use barbershop_calendar::calendar::grid::{HourRange, TimeGrid};
use barbershop_calendar::calendar::placement::place_appointments;
use barbershop_calendar::models::appointment::Appointment;
use barbershop_calendar::models::settings::ClockFormat;
use barbershop_calendar::models::ui::ViewMode;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;

struct NullHost;

impl CalendarHost for NullHost {
    fn view_appointment(&mut self, _id: i64) {}
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, minute, 0).unwrap()
}

fn day_grid(range: HourRange) -> TimeGrid {
    TimeGrid::new(ViewMode::Day, day(), 1, range, at(0, 0), ClockFormat::TwelveHour)
}

proptest! {
    /// Property: an appointment starting in range occupies its start slot and
    /// every following slot up to its end (or the end of the range)
    #[test]
    fn prop_in_range_appointment_spans_its_slots(
        first in 0..=12u32,
        span in 0..=11u32,
        offset in 0..=11u32,
        minute in 0..60u32,
        duration in 1..=240i64,
    ) {
        let range = HourRange::new(first, first + span);
        let hour = first + offset.min(span);
        let start = at(hour, minute);
        let appointments = vec![Appointment::new(1, start, duration, "alex")];
        let grid = day_grid(range);

        let placement = place_appointments(&appointments, &grid);
        let end = start + Duration::minutes(duration);

        for slot_hour in range.hours() {
            let occupied = !placement.get(day(), slot_hour).is_empty();
            let slot_start = at(slot_hour, 0);
            let expected = slot_hour >= hour && slot_start < end;
            prop_assert_eq!(occupied, expected, "hour {}", slot_hour);
        }

        let first_cell = placement.get(day(), hour);
        prop_assert!(first_cell[0].starts_here);
        prop_assert!(!first_cell[0].compact);
    }

    /// Property: appointments starting outside the visible hours are never placed
    #[test]
    fn prop_out_of_range_start_is_excluded(
        first in 6..=12u32,
        last in 12..=18u32,
        before in any::<bool>(),
        minute in 0..60u32,
        duration in 1..=600i64,
    ) {
        let range = HourRange::new(first, last);
        let start = if before {
            at(first - 1, minute)
        } else {
            at(last + 1, minute)
        };
        let appointments = vec![Appointment::new(7, start, duration, "sam")];
        let grid = day_grid(range);

        let placement = place_appointments(&appointments, &grid);
        prop_assert!(placement.is_empty());
        prop_assert!(!placement.contains(7));
    }

    /// Property: two appointments in the same slot are both flagged compact
    /// and listed by start time
    #[test]
    fn prop_shared_slot_is_compact(
        hour in 0..=23u32,
        a in 0..60u32,
        b in 0..60u32,
    ) {
        let appointments = vec![
            Appointment::new(1, at(hour, a), 5, "alex"),
            Appointment::new(2, at(hour, b), 5, "sam"),
        ];
        let grid = day_grid(HourRange::full_day());

        let placement = place_appointments(&appointments, &grid);
        let cell = placement.get(day(), hour);
        prop_assert_eq!(cell.len(), 2);
        prop_assert!(cell.iter().all(|p| p.compact));
        prop_assert!(cell[0].start <= cell[1].start);
        prop_assert!(cell.iter().all(|p| p.start.hour() == hour));
    }

    /// Property: select_date changes only the focused date
    #[test]
    fn prop_select_date_only_moves_focus(
        days in -400i64..400,
        week in any::<bool>(),
        selected in proptest::option::of(1..1000i64),
    ) {
        let mode = if week { ViewMode::Week } else { ViewMode::Day };
        let mut controller = ViewController::new(mode, day());
        if let Some(id) = selected {
            controller.view_appointment(id, &mut NullHost);
        }

        let target = day() + Duration::days(days);
        controller.select_date(target, &mut NullHost);

        prop_assert_eq!(controller.focused_date(), target);
        prop_assert_eq!(controller.mode(), mode);
        prop_assert_eq!(controller.state().selected_appointment, selected);
    }
}
