use chrono::{DateTime, Local, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::appointment::{Appointment, AppointmentStatus};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Appointment as it appears in the host's JSON export.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_start")]
    pub start: Option<String>,
    #[serde(default, alias = "duration", deserialize_with = "lenient_minutes")]
    pub duration_minutes: i64,
    #[serde(default, alias = "staff_id", alias = "barber_id")]
    pub resource_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Anything but a string start is unreadable and becomes `None`.
fn lenient_start<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => Some(raw),
        _ => None,
    })
}

/// Null or non-integer durations become 0, which placement rejects.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_i64().unwrap_or(0))
}

/// Parse a start timestamp into shop wall-clock time.
///
/// Offset timestamps (RFC 3339) are converted into `timezone`, or the local
/// zone when none is configured. Naive timestamps are taken as wall-clock
/// time already.
pub fn parse_start(raw: &str, timezone: Option<Tz>) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(match timezone {
            Some(tz) => dt.with_timezone(&tz).naive_local(),
            None => dt.with_timezone(&Local).naive_local(),
        });
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

pub fn record_to_appointment(record: AppointmentRecord, timezone: Option<Tz>) -> Appointment {
    let start = record
        .start
        .as_deref()
        .and_then(|raw| parse_start(raw, timezone));
    if start.is_none() {
        log::warn!(
            "Appointment {} has an unreadable start time: {:?}",
            record.id,
            record.start
        );
    }

    let status = match record.status.as_deref() {
        None => AppointmentStatus::default(),
        Some(raw) => AppointmentStatus::parse(raw).unwrap_or_else(|| {
            log::warn!(
                "Appointment {} has unknown status '{}', treating as booked",
                record.id,
                raw
            );
            AppointmentStatus::default()
        }),
    };

    Appointment {
        id: record.id,
        start,
        duration_minutes: record.duration_minutes,
        resource_id: record.resource_id,
        status,
        client_name: record.client_name,
        service: record.service,
        color: record.color,
    }
}
