use crate::dtos::{WebhookRequest, WebhookResponse};
use crate::models::AppointmentStatus;
use crate::services::AppointmentRegistry;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// POST `/` and `/webhook` — dispatches an inbound action against the
/// appointment registry.
///
/// Business failures (unknown patient, missing reschedule time, unknown
/// action) come back as HTTP 200 with `status: "error"`; only malformed
/// bodies and unexpected faults map to non-200 responses.
pub async fn receive_webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Result<Json<WebhookResponse>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::ValidationError(format!("Invalid request body: {}", e)))?;

    // Webhook-platform validation pings carry a type/event_type field and
    // skip the appointment logic entirely.
    if request.is_validation_ping() {
        return Ok(Json(WebhookResponse::received()));
    }

    let action = request.action.as_deref().unwrap_or_default().to_lowercase();
    let patient_name = request
        .patient_name
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    tracing::info!(%action, %patient_name, "Received webhook");

    let response = match action.as_str() {
        "lookup_appointment" => lookup_appointment(&state.registry, &patient_name).await,
        "check_availability" => check_availability(),
        "confirm_appointment" => {
            set_status(
                &state.registry,
                &patient_name,
                AppointmentStatus::Confirmed,
                "confirmed",
            )
            .await
        }
        "cancel_appointment" => {
            set_status(
                &state.registry,
                &patient_name,
                AppointmentStatus::Cancelled,
                "cancelled",
            )
            .await
        }
        "reschedule_appointment" => {
            reschedule_appointment(
                &state.registry,
                &patient_name,
                request.appointment_time.as_deref(),
            )
            .await
        }
        other => WebhookResponse::error(format!("Unknown action: {}", other)),
    };

    Ok(Json(response))
}

async fn lookup_appointment(registry: &AppointmentRegistry, patient: &str) -> WebhookResponse {
    match registry.find(patient).await {
        Some(appointment) => {
            WebhookResponse::success(format!("Found appointment for {}", title_case(patient)))
                .with_appointment(appointment)
        }
        None => {
            WebhookResponse::not_found(format!("No appointment found for {}", title_case(patient)))
        }
    }
}

fn check_availability() -> WebhookResponse {
    // Always the first three slots; no date or doctor filtering exists.
    WebhookResponse::success("Here are some available times")
        .with_slots(AppointmentRegistry::available_slots(3))
}

async fn set_status(
    registry: &AppointmentRegistry,
    patient: &str,
    status: AppointmentStatus,
    verb: &str,
) -> WebhookResponse {
    if registry.set_status(patient, status).await {
        WebhookResponse::success(format!("Appointment {} for {}", verb, title_case(patient)))
    } else {
        WebhookResponse::error("Appointment not found")
    }
}

async fn reschedule_appointment(
    registry: &AppointmentRegistry,
    patient: &str,
    appointment_time: Option<&str>,
) -> WebhookResponse {
    // An empty time string counts as absent.
    let Some(new_time) = appointment_time.filter(|t| !t.is_empty()) else {
        return WebhookResponse::error("Could not reschedule appointment");
    };

    if registry.reschedule(patient, new_time).await {
        // The message echoes the raw time string as given, not the parsed form.
        WebhookResponse::success(format!(
            "Appointment rescheduled for {} to {}",
            title_case(patient),
            new_time
        ))
    } else {
        WebhookResponse::error("Could not reschedule appointment")
    }
}

/// Uppercase the first letter of each space-separated word. Input names are
/// already lowercased by the dispatcher.
fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
