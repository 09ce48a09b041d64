use serde::{Deserialize, Serialize};

/// Status of an appointment as reported to callers.
///
/// Cancellation keeps the record in the registry; it only flips this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
}

/// A single patient appointment.
///
/// Dates and times are kept as the free-form strings callers send; the
/// service does no calendar arithmetic on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn new(date: &str, time: &str, doctor: &str) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            doctor: doctor.to_string(),
            status: AppointmentStatus::Scheduled,
        }
    }
}
