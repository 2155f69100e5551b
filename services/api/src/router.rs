//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the skill endpoint and OpenAPI documentation.

use crate::{
    handlers,
    models::{Card, ErrorResponse, OutputSpeech, Reprompt, RequestEnvelope, ResponseBody, ResponseEnvelope},
    state::AppState,
};

use axum::{Router, routing::post};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::handle_skill_request),
    components(
        schemas(RequestEnvelope, ResponseEnvelope, ResponseBody, OutputSpeech, Card, Reprompt, ErrorResponse)
    ),
    tags(
        (name = "Jester API", description = "Voice skill endpoint for category-based content")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/skill", post(handlers::handle_skill_request))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
