// Appointment module
// Barbershop appointment record as supplied by the host application

use chrono::{Duration, NaiveDateTime};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppointmentStatus {
    #[default]
    Booked,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status name, accepting the common spellings used by booking forms
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "booked" | "scheduled" | "confirmed" => Some(AppointmentStatus::Booked),
            "completed" | "done" => Some(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons an appointment record cannot be placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    #[error("appointment {id} has no valid start time")]
    MissingStart { id: i64 },

    #[error("appointment {id} has a non-positive duration ({minutes} min)")]
    NonPositiveDuration { id: i64, minutes: i64 },

    #[error("appointment {id} ends outside the representable calendar range")]
    OutOfRange { id: i64 },
}

/// A booked chair slot with one staff member (the resource).
///
/// `start` is a wall-clock timestamp in the shop's timezone. It is optional
/// because host data may carry missing or unparseable values; such records
/// stay in the host's list but are never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub start: Option<NaiveDateTime>,
    pub duration_minutes: i64,
    pub resource_id: String,
    pub status: AppointmentStatus,
    pub client_name: Option<String>,
    pub service: Option<String>,
    pub color: Option<String>,
}

impl Appointment {
    /// Create a booked appointment with the required fields
    ///
    /// # Examples
    /// ```
    /// use barbershop_calendar::models::appointment::Appointment;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 10)
    ///     .unwrap()
    ///     .and_hms_opt(9, 0, 0)
    ///     .unwrap();
    /// let appointment = Appointment::new(1, start, 30, "alex");
    /// assert!(appointment.validate().is_ok());
    /// ```
    pub fn new(
        id: i64,
        start: NaiveDateTime,
        duration_minutes: i64,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            start: Some(start),
            duration_minutes,
            resource_id: resource_id.into(),
            status: AppointmentStatus::Booked,
            client_name: None,
            service: None,
            color: None,
        }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_client(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Start and (exclusive) end of the appointment.
    pub fn window(&self) -> Result<(NaiveDateTime, NaiveDateTime), AppointmentError> {
        let start = self
            .start
            .ok_or(AppointmentError::MissingStart { id: self.id })?;

        if self.duration_minutes <= 0 {
            return Err(AppointmentError::NonPositiveDuration {
                id: self.id,
                minutes: self.duration_minutes,
            });
        }

        let end = Duration::try_minutes(self.duration_minutes)
            .and_then(|duration| start.checked_add_signed(duration))
            .ok_or(AppointmentError::OutOfRange { id: self.id })?;

        Ok((start, end))
    }

    pub fn validate(&self) -> Result<(), AppointmentError> {
        self.window().map(|_| ())
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.window().ok().map(|(_, end)| end)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }

    /// Short text for card titles: client name, then service, then the id
    pub fn display_title(&self) -> String {
        self.client_name
            .as_deref()
            .or(self.service.as_deref())
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Appointment #{}", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_appointment_defaults() {
        let appointment = Appointment::new(1, nine_am(), 30, "alex");
        assert_eq!(appointment.status, AppointmentStatus::Booked);
        assert_eq!(appointment.resource_id, "alex");
        assert!(appointment.client_name.is_none());
    }

    #[test]
    fn test_window_adds_duration() {
        let appointment = Appointment::new(1, nine_am(), 45, "alex");
        let (start, end) = appointment.window().unwrap();
        assert_eq!(start, nine_am());
        assert_eq!(end, nine_am() + Duration::minutes(45));
    }

    #[test]
    fn test_missing_start_is_error() {
        let mut appointment = Appointment::new(7, nine_am(), 30, "alex");
        appointment.start = None;
        assert_eq!(
            appointment.validate(),
            Err(AppointmentError::MissingStart { id: 7 })
        );
    }

    #[test]
    fn test_zero_and_negative_durations_are_errors() {
        let zero = Appointment::new(2, nine_am(), 0, "alex");
        let negative = Appointment::new(3, nine_am(), -15, "alex");

        assert_eq!(
            zero.validate(),
            Err(AppointmentError::NonPositiveDuration { id: 2, minutes: 0 })
        );
        assert_eq!(
            negative.validate(),
            Err(AppointmentError::NonPositiveDuration { id: 3, minutes: -15 })
        );
    }

    #[test]
    fn test_huge_duration_is_out_of_range() {
        let appointment = Appointment::new(4, nine_am(), i64::MAX, "alex");
        assert_eq!(
            appointment.validate(),
            Err(AppointmentError::OutOfRange { id: 4 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppointmentError::NonPositiveDuration { id: 5, minutes: 0 };
        assert_eq!(
            err.to_string(),
            "appointment 5 has a non-positive duration (0 min)"
        );
    }

    #[test]
    fn test_display_title_fallbacks() {
        let base = Appointment::new(9, nine_am(), 30, "alex");
        assert_eq!(base.display_title(), "Appointment #9");

        let with_service = base.clone().with_service("Skin fade");
        assert_eq!(with_service.display_title(), "Skin fade");

        let with_client = with_service.with_client("Jordan");
        assert_eq!(with_client.display_title(), "Jordan");
    }

    #[test]
    fn test_status_parse_accepts_variants() {
        assert_eq!(AppointmentStatus::parse("Booked"), Some(AppointmentStatus::Booked));
        assert_eq!(AppointmentStatus::parse("canceled"), Some(AppointmentStatus::Cancelled));
        assert_eq!(AppointmentStatus::parse(" done "), Some(AppointmentStatus::Completed));
        assert_eq!(AppointmentStatus::parse("no-show"), None);
    }
}
