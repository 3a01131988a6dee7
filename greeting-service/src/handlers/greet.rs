use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::dtos::GreetingResponse;
use crate::services::record_greeting;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    pub name: Option<String>,
}

/// `GET /api/greet` — greet the caller.
///
/// The `name` field of the response echoes the raw query parameter; only the
/// message uses the trimmed value. The computation is total, so this handler
/// cannot fail.
#[tracing::instrument(skip(state))]
pub async fn greet(
    State(state): State<AppState>,
    Query(query): Query<GreetQuery>,
) -> Json<GreetingResponse> {
    let message = state.greeter.greet(query.name.as_deref());
    record_greeting(query.name.is_some());

    tracing::debug!(named = query.name.is_some(), "Greeting served");

    Json(GreetingResponse {
        name: query.name,
        message,
    })
}
