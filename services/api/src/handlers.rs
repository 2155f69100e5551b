//! Axum Handlers for the Skill Endpoint
//!
//! This module verifies that an inbound request belongs to this skill, hands it
//! to the configured `SkillHandler`, and wraps the resulting directive in the
//! platform's response envelope. It uses `utoipa` doc comments to generate
//! OpenAPI documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use jester_core::Session;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    config::Config,
    models::{ErrorResponse, RequestEnvelope, ResponseEnvelope, SkillRequest},
    state::AppState,
};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(ErrorResponse { message })).into_response()
            }
        }
    }
}

/// Handle a launch, intent or session-ended request from the voice platform.
#[utoipa::path(
    post,
    path = "/skill",
    request_body = RequestEnvelope,
    responses(
        (status = 200, description = "Spoken response for the request", body = ResponseEnvelope),
        (status = 400, description = "Unsupported request type", body = ErrorResponse),
        (status = 403, description = "Application id does not match this skill", body = ErrorResponse)
    )
)]
#[instrument(name = "skill_request", skip_all, fields(request_id, session_id))]
pub async fn handle_skill_request(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let span = tracing::Span::current();
    span.record("request_id", envelope.request.request_id());
    span.record("session_id", envelope.session.session_id.as_str());

    verify_application(&state.config, &envelope.session)?;

    let session = envelope.session;
    if session.new {
        state.skill.on_session_started(&session);
    }

    let directive = match envelope.request {
        SkillRequest::LaunchRequest { .. } => state.skill.on_launch(&session),
        SkillRequest::IntentRequest { intent, .. } => state.skill.on_intent(&intent, &session),
        SkillRequest::SessionEndedRequest { reason, .. } => {
            state.skill.on_session_end(&session, reason.as_deref());
            return Ok(Json(ResponseEnvelope::session_ended()));
        }
        SkillRequest::Unsupported => {
            warn!("Rejecting unsupported request type");
            return Err(ApiError::BadRequest("Unsupported request type".to_string()));
        }
    };

    info!(terminal = directive.is_terminal(), "Responding");
    Ok(Json(ResponseEnvelope::from_directive(
        directive,
        session.attributes,
    )))
}

/// Rejects requests addressed to a different application, when one is configured.
fn verify_application(config: &Config, session: &Session) -> Result<(), ApiError> {
    match &config.app_id {
        Some(expected) if *expected != session.application.application_id => {
            warn!(
                received = %session.application.application_id,
                "Application id mismatch"
            );
            Err(ApiError::Forbidden("Invalid applicationId".to_string()))
        }
        _ => Ok(()),
    }
}
