// Test fixtures - reusable test data
// Provides consistent appointments and dates across all test files

#![allow(dead_code)]

use barbershop_calendar::models::appointment::{Appointment, AppointmentStatus};
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 10 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Wednesday of the same week
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    /// Sunday ending the same week (Monday-first)
    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
    }

    /// Monday at the given hour and minute
    pub fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        monday().and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Feb 29, 2024 at noon (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }
}

/// Sample appointments for testing
pub mod appointments {
    use super::*;

    /// A 30 minute haircut on Monday at 9:00
    pub fn haircut() -> Appointment {
        Appointment::new(1, dates::monday_at(9, 0), 30, "alex")
            .with_client("Jordan")
            .with_service("Haircut")
    }

    /// A beard trim on Monday at 9:15 that overlaps the haircut's slot
    pub fn beard_trim() -> Appointment {
        Appointment::new(2, dates::monday_at(9, 15), 30, "sam")
            .with_client("Riley")
            .with_service("Beard trim")
    }

    /// A 90 minute colour appointment spanning two slots
    pub fn colour() -> Appointment {
        Appointment::new(3, dates::monday_at(14, 30), 90, "alex").with_service("Colour")
    }

    /// A cancelled appointment on Wednesday
    pub fn cancelled() -> Appointment {
        Appointment::new(4, dates::wednesday().and_hms_opt(11, 0, 0).unwrap(), 45, "sam")
            .with_status(AppointmentStatus::Cancelled)
    }

    /// A record with no start time
    pub fn missing_start() -> Appointment {
        let mut appointment = Appointment::new(5, dates::monday_at(10, 0), 30, "alex");
        appointment.start = None;
        appointment
    }

    /// A record with a zero duration
    pub fn zero_duration() -> Appointment {
        Appointment::new(6, dates::monday_at(10, 0), 0, "alex")
    }

    pub fn sample_day() -> Vec<Appointment> {
        vec![
            haircut(),
            beard_trim(),
            colour(),
            cancelled(),
            missing_start(),
            zero_duration(),
        ]
    }
}

/// JSON export matching `sample_day`'s valid entries
pub const SAMPLE_EXPORT: &str = r#"[
    {"id": 1, "start": "2025-03-10T09:00:00", "duration_minutes": 30, "resource_id": "alex", "client_name": "Jordan", "service": "Haircut"},
    {"id": 2, "start": "2025-03-10 09:15", "duration_minutes": 30, "staff_id": "sam", "client_name": "Riley"},
    {"id": 3, "start": "2025-03-10T14:30:00", "duration": 90, "resource_id": "alex", "status": "confirmed"},
    {"id": 4, "start": "2025-03-12T11:00:00", "duration_minutes": 45, "resource_id": "sam", "status": "cancelled"},
    {"id": 5, "start": null, "duration_minutes": 30, "resource_id": "alex"}
]"#;
