use crate::models::{Appointment, AppointmentStatus};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The fixed list of open slots offered by `check_availability`, in order.
pub const AVAILABLE_SLOTS: [&str; 6] = [
    "2025-07-29 2:00 PM",
    "2025-07-30 10:00 AM",
    "2025-07-30 4:00 PM",
    "2025-07-31 9:00 AM",
    "2025-07-31 1:00 PM",
    "2025-08-01 11:00 AM",
];

/// In-memory patient-name to appointment store shared by all requests.
///
/// Keys are lowercased patient names. Mutating actions hold the write lock
/// across their whole read-check-then-write sequence, so each action is
/// atomic with respect to concurrent requests. Records are never removed;
/// cancellation is a status change.
#[derive(Clone)]
pub struct AppointmentRegistry {
    appointments: Arc<RwLock<HashMap<String, Appointment>>>,
}

impl AppointmentRegistry {
    pub fn new(appointments: HashMap<String, Appointment>) -> Self {
        Self {
            appointments: Arc::new(RwLock::new(appointments)),
        }
    }

    /// Registry pre-loaded with the demo appointment data.
    pub fn seeded() -> Self {
        let mut appointments = HashMap::new();
        appointments.insert(
            "john smith".to_string(),
            Appointment::new("2025-07-30", "3:00 PM", "Dr. Clark"),
        );
        appointments.insert(
            "jane doe".to_string(),
            Appointment::new("2025-07-29", "10:00 AM", "Dr. Martinez"),
        );
        Self::new(appointments)
    }

    /// Look up a patient's appointment by lowercased name.
    pub async fn find(&self, patient: &str) -> Option<Appointment> {
        self.appointments.read().await.get(patient).cloned()
    }

    /// Set the status of a patient's appointment. Returns false when the
    /// patient is unknown.
    pub async fn set_status(&self, patient: &str, status: AppointmentStatus) -> bool {
        match self.appointments.write().await.get_mut(patient) {
            Some(appointment) => {
                appointment.status = status;
                true
            }
            None => false,
        }
    }

    /// Move a patient's appointment to `new_time`, given as
    /// `"<date> <time...>"`: the first whitespace token becomes the new date,
    /// the remaining tokens (rejoined with single spaces) the new time.
    /// Returns false when the patient is unknown.
    ///
    /// The new slot is not checked against `AVAILABLE_SLOTS` and no conflict
    /// detection happens.
    pub async fn reschedule(&self, patient: &str, new_time: &str) -> bool {
        match self.appointments.write().await.get_mut(patient) {
            Some(appointment) => {
                let mut tokens = new_time.split_whitespace();
                appointment.date = tokens.next().unwrap_or_default().to_string();
                appointment.time = tokens.collect::<Vec<_>>().join(" ");
                true
            }
            None => false,
        }
    }

    /// The first `n` entries of the fixed slot list.
    pub fn available_slots(n: usize) -> Vec<String> {
        AVAILABLE_SLOTS
            .iter()
            .take(n)
            .map(|s| s.to_string())
            .collect()
    }
}
