pub mod health;
pub mod info;
pub mod webhook;

pub use health::health_check;
pub use info::{service_info, webhook_info};
pub use webhook::receive_webhook;
