use crate::models::Appointment;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound webhook payload. Every field is optional; the dispatcher decides
/// what is required per action.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    /// Webhook-platform event marker. Its presence alone triggers the
    /// validation acknowledgment, whatever the value holds.
    #[serde(rename = "type")]
    pub event: Option<Value>,
    pub event_type: Option<Value>,
    pub action: Option<String>,
    pub patient_name: Option<String>,
    pub appointment_time: Option<String>,
}

impl WebhookRequest {
    /// True for webhook-platform validation pings, which bypass all
    /// appointment logic.
    pub fn is_validation_ping(&self) -> bool {
        self.event.is_some() || self.event_type.is_some()
    }
}

/// Outbound webhook response: a status tag, a human-readable message, and the
/// optional sections individual actions fill in.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<Vec<String>>,
}

impl WebhookResponse {
    fn new(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            appointment: None,
            available_slots: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("success", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }

    /// The fixed acknowledgment sent for validation pings.
    pub fn received() -> Self {
        Self::new("received", "Telnyx webhook received successfully")
    }

    pub fn with_appointment(mut self, appointment: Appointment) -> Self {
        self.appointment = Some(appointment);
        self
    }

    pub fn with_slots(mut self, slots: Vec<String>) -> Self {
        self.available_slots = Some(slots);
        self
    }
}
