pub mod greeting;
pub mod metrics;

pub use greeting::{Greeter, GreetingService};
pub use metrics::{get_metrics, init_metrics, record_greeting};
