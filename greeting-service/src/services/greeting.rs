//! Greeting computation.
//!
//! The capability is a trait so handlers can hold test doubles; only one
//! production implementation exists.

/// Maps an optional caller-supplied name to a greeting message.
pub trait Greeter: Send + Sync {
    fn greet(&self, name: Option<&str>) -> String;
}

/// Production greeter. Blank input (absent, empty, or whitespace-only) falls
/// back to the anonymous greeting; anything else is trimmed before use.
#[derive(Debug, Clone, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }
}

impl Greeter for GreetingService {
    fn greet(&self, name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => format!("Hello, {}", trimmed),
            _ => "Hello, World".to_string(),
        }
    }
}
