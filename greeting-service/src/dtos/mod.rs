use serde::{Deserialize, Serialize};

/// Response body for `GET /api/greet`.
///
/// `name` echoes the raw query parameter exactly as received (serialized as
/// `null` when absent); `message` is the computed greeting, which always
/// starts with `"Hello, "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub name: Option<String>,
    pub message: String,
}
