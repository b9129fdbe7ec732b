use std::collections::HashMap;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod careers;
pub mod students;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Non-empty path segment, or a 400 carrying `message`.
pub(crate) fn path_param<'a>(
    params: &'a HashMap<String, String>,
    key: &str,
    message: &str,
) -> Result<&'a str, ApiError> {
    match params.get(key).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(message)),
    }
}

/// Build the full application router: student and career routes, health and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let students = Router::new()
        .route("/students", post(students::create_student))
        .route("/students/:studentEmail/careers/:careerID", post(students::assign_student_to_career))
        .route("/students/:studentEmail/careers/:careerID/subjects", get(students::get_student_subjects))
        .route(
            "/students/:studentEmail/careers/:careerID/subjects/:subjectID",
            put(students::update_student_subject),
        );

    let careers = Router::new()
        .route("/careers/:careerID/subjects/:subjectID", get(careers::get_subject_details))
        .route("/careers/:careerID/subjects/:subjectID/professorships", get(careers::get_professorships));

    Router::new()
        .route("/health", get(health))
        .merge(students)
        .merge(careers)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
