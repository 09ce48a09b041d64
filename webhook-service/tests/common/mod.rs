//! Test helper module for webhook-service integration tests.

#![allow(dead_code)]

use service_core::config::Config;
use webhook_service::startup::Application;

/// Test application wrapper for integration tests.
///
/// Each spawn builds its own application, so every test gets a fresh
/// appointment registry.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        let config = Config { port: 0 };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        // The listener is already bound, so requests sent immediately after
        // this returns will be accepted once the server task runs.
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }

    /// POST a JSON payload to the webhook endpoint.
    pub async fn post_webhook(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/webhook", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
