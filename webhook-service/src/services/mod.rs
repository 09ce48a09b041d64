mod registry;

pub use registry::{AppointmentRegistry, AVAILABLE_SLOTS};
