// Unit tests for hour labels and day slot generation

use barbershop_calendar::calendar::grid::{day_slots, hour_label, HourRange};
use barbershop_calendar::models::settings::ClockFormat;
use chrono::NaiveDate;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "12:00 AM" ; "midnight")]
    #[test_case(1, "1:00 AM" ; "early morning")]
    #[test_case(11, "11:00 AM" ; "late morning")]
    #[test_case(12, "12:00 PM" ; "noon")]
    #[test_case(14, "2:00 PM" ; "afternoon")]
    #[test_case(23, "11:00 PM" ; "last hour")]
    fn test_twelve_hour_labels(hour: u32, expected: &str) {
        assert_eq!(hour_label(hour, ClockFormat::TwelveHour), expected);
    }

    #[test_case(0, "00:00")]
    #[test_case(9, "09:00")]
    #[test_case(23, "23:00")]
    fn test_twenty_four_hour_labels(hour: u32, expected: &str) {
        assert_eq!(hour_label(hour, ClockFormat::TwentyFourHour), expected);
    }

    #[test]
    fn test_hour_past_end_of_day_is_clipped() {
        assert_eq!(hour_label(30, ClockFormat::TwelveHour), "11:00 PM");
    }

    #[test]
    fn test_current_hour_flag_marks_one_slot() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let now = date.and_hms_opt(14, 20, 0).unwrap();

        let slots = day_slots(date, HourRange::new(8, 18), now, ClockFormat::TwelveHour);
        assert_eq!(slots.len(), 11);

        let current: Vec<u32> = slots.iter().filter(|s| s.is_current).map(|s| s.hour).collect();
        assert_eq!(current, vec![14], "Only the 2 PM slot should be current");
        assert_eq!(slots[6].label, "2:00 PM");
    }

    #[test]
    fn test_no_current_slot_on_another_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let now = date.succ_opt().unwrap().and_hms_opt(14, 0, 0).unwrap();

        let slots = day_slots(date, HourRange::full_day(), now, ClockFormat::TwentyFourHour);
        assert!(slots.iter().all(|s| !s.is_current));
    }
}
