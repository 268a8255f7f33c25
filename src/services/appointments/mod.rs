//! Appointment source for the calendar.
//! Reads the host's JSON appointment export and narrows it to what the
//! calendar should show. The calendar never writes appointments back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use directories::ProjectDirs;

use crate::calendar::placement::{filter_by_resource, find_overlaps, Overlap};
use crate::models::appointment::Appointment;

mod mapper;

pub use mapper::{parse_start, record_to_appointment, AppointmentRecord};

pub const APPOINTMENTS_FILE_NAME: &str = "appointments.json";

/// Default export location in the platform data directory.
pub fn default_appointments_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "BarbershopCalendar", "BarbershopCalendar")
        .map(|dirs| dirs.data_dir().join(APPOINTMENTS_FILE_NAME))
}

/// Load appointments from a JSON array. A missing file is an empty list.
pub fn load_appointments(path: &Path, timezone: Option<Tz>) -> Result<Vec<Appointment>> {
    if !path.exists() {
        log::info!("No appointments file at {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read appointments from {}", path.display()))?;
    parse_appointments(&data, timezone)
        .with_context(|| format!("failed to deserialize appointments from {}", path.display()))
}

/// Parse a JSON array of appointment records. Only a document that is not an
/// array fails; an entry that cannot form a record is logged and dropped.
pub fn parse_appointments(json: &str, timezone: Option<Tz>) -> Result<Vec<Appointment>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = entries.len();
    let appointments: Vec<Appointment> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<AppointmentRecord>(entry) {
                Ok(record) => Some(record_to_appointment(record, timezone)),
                Err(e) => {
                    log::warn!("Skipping appointment entry {}: {}", index, e);
                    None
                }
            }
        })
        .collect();
    log::info!("Loaded {} of {} appointments", appointments.len(), total);
    Ok(appointments)
}

/// Double-bookings among appointments that still take up a chair.
pub fn active_overlaps(appointments: &[Appointment]) -> Vec<Overlap> {
    let active: Vec<Appointment> = appointments
        .iter()
        .filter(|appointment| !appointment.is_cancelled())
        .cloned()
        .collect();
    find_overlaps(&active)
}

/// Apply the user's display filters: one staff member and/or no cancelled
/// appointments.
pub fn visible_appointments(
    appointments: &[Appointment],
    resource: Option<&str>,
    hide_cancelled: bool,
) -> Vec<Appointment> {
    let mut visible = filter_by_resource(appointments, resource);
    if hide_cancelled {
        visible.retain(|appointment| !appointment.is_cancelled());
    }
    visible
}

/// Distinct staff ids, sorted, for the resource filter menu.
pub fn resource_ids(appointments: &[Appointment]) -> Vec<String> {
    let mut ids: Vec<String> = appointments
        .iter()
        .map(|appointment| appointment.resource_id.clone())
        .filter(|id| !id.is_empty())
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 1, "start": "2025-03-10T09:00:00", "duration_minutes": 30, "resource_id": "alex", "status": "booked"},
        {"id": 2, "start": "2025-03-10T09:15:00", "duration_minutes": 30, "resource_id": "sam", "status": "cancelled"},
        {"id": 3, "start": null, "duration_minutes": 30, "resource_id": "alex"}
    ]"#;

    #[test]
    fn test_parse_keeps_malformed_records() {
        let appointments = parse_appointments(SAMPLE, None).unwrap();
        assert_eq!(appointments.len(), 3);
        assert!(appointments[2].start.is_none());
        assert_eq!(appointments[1].status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let appointments = load_appointments(file.path(), None).unwrap();
        assert_eq!(appointments.len(), 3);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let appointments = load_appointments(&dir.path().join("missing.json"), None).unwrap();
        assert!(appointments.is_empty());
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let err = load_appointments(file.path(), None).unwrap_err();
        assert!(err.to_string().contains("failed to deserialize appointments"));
    }

    #[test]
    fn test_visible_appointments_filters() {
        let appointments = parse_appointments(SAMPLE, None).unwrap();

        assert_eq!(visible_appointments(&appointments, None, false).len(), 3);
        assert_eq!(visible_appointments(&appointments, None, true).len(), 2);

        let alex = visible_appointments(&appointments, Some("alex"), true);
        assert_eq!(alex.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_badly_typed_entries_do_not_drop_the_rest() {
        let json = r#"[
            {"id": 1, "start": "2025-03-10T09:00:00", "duration_minutes": 30, "resource_id": "alex"},
            {"id": 2, "start": 20250310, "duration_minutes": 30, "resource_id": "alex"},
            {"id": 3, "start": "2025-03-10T10:00:00", "duration_minutes": null, "resource_id": "sam"},
            {"start": "2025-03-10T11:00:00", "duration_minutes": 30},
            {"id": "six", "start": "2025-03-10T12:00:00", "duration_minutes": 30}
        ]"#;

        let appointments = parse_appointments(json, None).unwrap();
        assert_eq!(appointments.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(appointments[0].validate().is_ok());
        assert!(appointments[1].start.is_none());
        assert_eq!(appointments[2].duration_minutes, 0);
    }

    #[test]
    fn test_non_array_document_is_error() {
        assert!(parse_appointments(r#"{"id": 1}"#, None).is_err());
    }

    #[test]
    fn test_cancelled_appointments_are_not_double_bookings() {
        let json = r#"[
            {"id": 1, "start": "2025-03-10T09:00:00", "duration_minutes": 60, "resource_id": "alex"},
            {"id": 2, "start": "2025-03-10T09:30:00", "duration_minutes": 30, "resource_id": "alex", "status": "cancelled"},
            {"id": 3, "start": "2025-03-10T09:45:00", "duration_minutes": 30, "resource_id": "sam"}
        ]"#;
        let appointments = parse_appointments(json, None).unwrap();

        assert_eq!(find_overlaps(&appointments).len(), 1);
        assert!(active_overlaps(&appointments).is_empty());
    }

    #[test]
    fn test_resource_ids_are_distinct() {
        let appointments = parse_appointments(SAMPLE, None).unwrap();
        assert_eq!(resource_ids(&appointments), vec!["alex", "sam"]);
    }
}
