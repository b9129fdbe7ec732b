use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::{ErrorKind, ServiceError};
use thiserror::Error;
use tracing::error;

/// Error returned by every handler, rendered as
/// `{"status": 404, "code": "not_found", "message": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    code: String,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

/// Lowercase reason phrase with spaces as underscores, e.g. `unprocessable_entity`.
pub fn status_code_name(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("unknown").to_lowercase().replace(' ', "_")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %self.message, "request failed");
        }
        let body = ErrorBody {
            status: self.status.as_u16(),
            code: status_code_name(self.status),
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match err.kind() {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => Self::bad_request(msg),
            ModelError::Db(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::storage::StorageError;

    #[test]
    fn code_names_follow_reason_phrase() {
        assert_eq!(status_code_name(StatusCode::BAD_REQUEST), "bad_request");
        assert_eq!(status_code_name(StatusCode::NOT_FOUND), "not_found");
        assert_eq!(status_code_name(StatusCode::UNPROCESSABLE_ENTITY), "unprocessable_entity");
        assert_eq!(status_code_name(StatusCode::INTERNAL_SERVER_ERROR), "internal_server_error");
    }

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::InvalidArgument("career id".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound { context: "x".into() }, StatusCode::NOT_FOUND),
            (ServiceError::CareerAlreadyAssigned, StatusCode::CONFLICT),
            (ServiceError::MaxCareersReached, StatusCode::CONFLICT),
            (ServiceError::StudentAlreadyExists, StatusCode::CONFLICT),
            (ServiceError::Schedule("bad day".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::Storage {
                    context: "x".into(),
                    source: StorageError::Db(sea_orm::DbErr::Custom("down".into())),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn validation_message_is_kept() {
        let err = ApiError::from(ModelError::Validation("status is required".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "status is required");
    }
}
