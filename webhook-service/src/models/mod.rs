//! Domain models for webhook-service.

mod appointment;

pub use appointment::{Appointment, AppointmentStatus};
