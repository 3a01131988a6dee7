use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct GreetingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
}

impl GreetingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(GreetingConfig {
            common,
            service_name: get_env("SERVICE_NAME", "greeting-service"),
            service_version: get_env("SERVICE_VERSION", env!("CARGO_PKG_VERSION")),
            log_level: get_env("LOG_LEVEL", "info"),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
