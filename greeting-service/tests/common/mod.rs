//! Test helper module for greeting-service integration tests.

#![allow(dead_code)]

use greeting_service::config::GreetingConfig;
use greeting_service::startup::Application;
use service_core::config::Config as CoreConfig;

/// Test application wrapper running on a random port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn a new test application.
    pub async fn spawn() -> Self {
        let config = GreetingConfig {
            common: CoreConfig { port: 0 },
            service_name: "greeting-service-test".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(app.run_until_stopped());

        Self {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}
