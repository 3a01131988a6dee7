pub mod greet;
pub mod health;

pub use greet::greet;
pub use health::{health_check, metrics_handler, readiness_check};
