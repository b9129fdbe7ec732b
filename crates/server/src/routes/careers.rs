use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use service::student::domain::{ProfessorshipsResponse, SubjectDetailsResponse};

use super::path_param;
use crate::errors::ApiError;
use crate::state::ServerState;

const CAREER_ID_REQUIRED: &str = "career id is required";
const SUBJECT_ID_REQUIRED: &str = "subject id is required";

#[utoipa::path(
    get, path = "/careers/{careerID}/subjects/{subjectID}", tag = "careers",
    params(
        ("careerID" = String, Path, description = "Career id"),
        ("subjectID" = String, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject details", body = crate::openapi::SubjectDetailsDoc),
        (status = 400, description = "Missing or invalid parameter", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Subject not offered by career", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_subject_details(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<SubjectDetailsResponse>, ApiError> {
    let career_id = path_param(&params, "careerID", CAREER_ID_REQUIRED)?;
    let subject_id = path_param(&params, "subjectID", SUBJECT_ID_REQUIRED)?;

    let details = state.students.get_subject_details(subject_id, career_id).await?;
    Ok(Json(details))
}

#[utoipa::path(
    get, path = "/careers/{careerID}/subjects/{subjectID}/professorships", tag = "careers",
    params(
        ("careerID" = String, Path, description = "Career id"),
        ("subjectID" = String, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Weekly schedule per professorship", body = crate::openapi::ProfessorshipsDoc),
        (status = 400, description = "Missing or invalid parameter", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "No professorships", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_professorships(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<ProfessorshipsResponse>, ApiError> {
    let career_id = path_param(&params, "careerID", CAREER_ID_REQUIRED)?;
    let subject_id = path_param(&params, "subjectID", SUBJECT_ID_REQUIRED)?;

    let professorships = state.students.get_professorships(subject_id, career_id).await?;
    Ok(Json(professorships))
}
