//! Webhook Handler
//!
//! One POST per turn: decode the envelope, dispatch to the skill
//! service, encode the spoken reply.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jobjar_core::application::SkillService;
use jobjar_core::domain::SpeechResponse;
use tracing::{error, warn};

use crate::error::to_http_error;
use crate::types::{RequestEnvelope, ResponseEnvelope};

/// Handler state with injected dependencies
pub struct AppState {
    pub service: SkillService,
    /// When set, events carrying any other application id are rejected.
    pub application_id: Option<String>,
}

pub async fn handle_event(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, (StatusCode, String)> {
    if let Some(expected) = &state.application_id {
        match envelope.application_id() {
            Some(id) if id == expected => {}
            other => {
                warn!(application_id = ?other, "Rejecting event for unknown application");
                return Err((StatusCode::FORBIDDEN, "unknown application".to_string()));
            }
        }
    }

    if envelope.is_session_ended() {
        return Ok(Json(ResponseEnvelope::empty()));
    }

    let user_id = envelope.user_id().map_err(to_http_error)?.to_string();
    let event = envelope.to_event();

    match state.service.handle(&user_id, event).await {
        Ok(response) => Ok(Json(response.into())),
        Err(err) => {
            // A store failure ends the turn with a generic spoken apology;
            // the cause goes to the log, never to the user.
            error!(error = %err, "Intent handling failed");
            Ok(Json(
                SpeechResponse::tell("Sorry, something went wrong. Please try again.").into(),
            ))
        }
    }
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": jobjar_core::VERSION,
    }))
}
