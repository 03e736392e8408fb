//! REST endpoints for the support chat widget.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::responder::SupportResponder;
use super::types::{ConversationTurn, ResponseEnvelope, SuggestedAction};
use crate::error::RequestError;

// ── JSON Protocol ───────────────────────────────────────────────────────

/// Body of `POST /api/support/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Option<Vec<ConversationTurn>>,
}

/// Successful chat reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub suggested_actions: Vec<WireAction>,
}

/// Suggested action as the widget expects it.
#[derive(Debug, Serialize)]
pub struct WireAction {
    pub label: String,
    pub action: &'static str,
    pub value: String,
}

impl From<SuggestedAction> for WireAction {
    fn from(action: SuggestedAction) -> Self {
        Self {
            action: action.target.kind(),
            value: action.target.value().to_string(),
            label: action.label,
        }
    }
}

impl From<ResponseEnvelope> for ChatResponse {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self {
            response: envelope.content,
            suggested_actions: envelope.actions.into_iter().map(WireAction::from).collect(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::Malformed(_) => StatusCode::BAD_REQUEST,
            RequestError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(serde_json::json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}

// ── Handlers ────────────────────────────────────────────────────────────

/// Shared state for support routes.
#[derive(Clone)]
pub struct SupportRouteState {
    pub responder: Arc<SupportResponder>,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "agent-market-support"
    }))
}

/// POST /api/support/chat
///
/// The body is buffered and parsed by hand so that oversized or malformed
/// input gets the same `{"error": ...}` shape as every other failure.
async fn chat(
    State(state): State<SupportRouteState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, RequestError> {
    let request_id = Uuid::new_v4();

    let body = body.map_err(|rejection| {
        warn!(%request_id, error = %rejection, "Failed to read support request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RequestError::TooLarge(rejection.body_text())
        } else {
            RequestError::Malformed(rejection.body_text())
        }
    })?;

    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(%request_id, error = %e, "Rejected malformed support request");
        RequestError::Malformed(e.to_string())
    })?;

    let history = request.conversation_history.unwrap_or_default();
    let reply = state.responder.respond(&request.message, &history);

    info!(
        %request_id,
        intent = %reply.intent,
        history_turns = history.len(),
        "Answered support message"
    );

    Ok(Json(ChatResponse::from(reply.envelope)))
}

/// Build the support REST routes.
pub fn support_routes(responder: Arc<SupportResponder>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/support/chat", post(chat))
        .with_state(SupportRouteState { responder })
}

/// Convert a handler panic into a generic 500.
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(detail = %detail, "Handler panicked");
    RequestError::Internal(detail).into_response()
}
