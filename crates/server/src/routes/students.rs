use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{student, student_career_subject};
use serde::Deserialize;
use service::student::domain::{StudentSubjectsResponse, UpdateStudentSubjectRequest};
use tracing::info;
use utoipa::ToSchema;

use super::path_param;
use crate::errors::ApiError;
use crate::state::ServerState;

const STUDENT_EMAIL_REQUIRED: &str = "student email is required";
const CAREER_ID_REQUIRED: &str = "career id is required";
const SUBJECT_ID_REQUIRED: &str = "subject id is required";

/// Missing or null fields decode as empty strings and are rejected by validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSubjectBody {
    /// `PENDIENTE` or `APROBADA`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = CreateStudentBody,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Student already exists", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Malformed JSON", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create_student(
    State(state): State<ServerState>,
    payload: Result<Json<CreateStudentBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let name = body.name.unwrap_or_default();
    let email = body.student_email.unwrap_or_default();
    student::validate_name(&name)?;
    student::validate_email(&email)?;

    state.students.create_student(&name, &email).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post, path = "/students/{studentEmail}/careers/{careerID}", tag = "students",
    params(
        ("studentEmail" = String, Path, description = "Student email"),
        ("careerID" = String, Path, description = "Career id")
    ),
    responses(
        (status = 200, description = "Assigned"),
        (status = 400, description = "Missing or invalid parameter", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Unknown student or career", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Already assigned or career limit reached", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn assign_student_to_career(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<StatusCode, ApiError> {
    let email = path_param(&params, "studentEmail", STUDENT_EMAIL_REQUIRED)?;
    let career_id = path_param(&params, "careerID", CAREER_ID_REQUIRED)?;

    state.students.assign_student_to_career(email, career_id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get, path = "/students/{studentEmail}/careers/{careerID}/subjects", tag = "students",
    params(
        ("studentEmail" = String, Path, description = "Student email"),
        ("careerID" = String, Path, description = "Career id")
    ),
    responses(
        (status = 200, description = "Subjects and correlatives keyed by subject id", body = crate::openapi::StudentSubjectsDoc),
        (status = 400, description = "Missing or invalid parameter", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "No subjects", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_student_subjects(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<StudentSubjectsResponse>, ApiError> {
    let email = path_param(&params, "studentEmail", STUDENT_EMAIL_REQUIRED)?;
    let career_id = path_param(&params, "careerID", CAREER_ID_REQUIRED)?;

    let subjects = state.students.get_student_subjects(email, career_id).await?;
    info!(count = subjects.subjects.len(), "student subjects listed");
    Ok(Json(subjects))
}

#[utoipa::path(
    put, path = "/students/{studentEmail}/careers/{careerID}/subjects/{subjectID}", tag = "students",
    params(
        ("studentEmail" = String, Path, description = "Student email"),
        ("careerID" = String, Path, description = "Career id"),
        ("subjectID" = String, Path, description = "Subject id")
    ),
    request_body = UpdateSubjectBody,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Unknown student, assignment or subject", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Malformed JSON", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_student_subject(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    payload: Result<Json<UpdateSubjectBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let email = path_param(&params, "studentEmail", STUDENT_EMAIL_REQUIRED)?;
    let career_id = path_param(&params, "careerID", CAREER_ID_REQUIRED)?;
    let subject_id = path_param(&params, "subjectID", SUBJECT_ID_REQUIRED)?;

    let Json(body) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let status = body.status.unwrap_or_default();
    let description = body.description.unwrap_or_default();
    student_career_subject::validate_status(&status)?;
    student_career_subject::validate_description(&description)?;

    state
        .students
        .update_student_subject(UpdateStudentSubjectRequest {
            student_email: email.to_string(),
            career_id: career_id.to_string(),
            subject_id: subject_id.to_string(),
            status,
            description: Some(description),
        })
        .await?;
    Ok(StatusCode::OK)
}
