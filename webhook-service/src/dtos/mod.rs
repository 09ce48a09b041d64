mod webhook;

pub use webhook::{WebhookRequest, WebhookResponse};
