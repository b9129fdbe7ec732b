//! Persistence seam of the student service.
//!
//! [`Storage`] is implemented by [`seaorm::SeaOrmStorage`] for PostgreSQL and by
//! [`mock::MockStorage`] for tests and doc examples.

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

pub mod mock;
pub mod seaorm;

pub use seaorm::SeaOrmStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage: resource not found: {0}")]
    NotFound(String),
    #[error("storage: resource already exists: {0}")]
    AlreadyExists(String),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// One subject of a career as seen by a student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSubject {
    pub subject_id: i32,
    pub name: String,
    pub subject_type: String,
    pub status: String,
    pub description: Option<String>,
    pub correlative_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectDetails {
    pub id: i32,
    pub name: String,
    pub subject_type: String,
    pub hours: i32,
    pub points: i32,
    pub uri: Option<String>,
    pub meet: Option<String>,
}

/// A single weekly meeting of a professorship, times formatted `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorshipSchedule {
    pub name: String,
    pub day: i32,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentSubjectUpdate {
    pub student_email: String,
    pub career_id: i32,
    pub subject_id: i32,
    pub status: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait Storage: Send + Sync {
    /// Careers the student is enrolled in. `NotFound` when there are none.
    async fn get_student_career_ids(&self, email: &str) -> Result<Vec<i32>, StorageError>;

    /// Enrolls the student in one transaction. `NotFound` for an unknown
    /// student or career, `AlreadyExists` when the pair is already stored.
    async fn assign_student_to_career(&self, email: &str, career_id: i32) -> Result<(), StorageError>;

    async fn get_student_subjects(&self, email: &str, career_id: i32) -> Result<Vec<StudentSubject>, StorageError>;

    async fn get_subject_details(&self, subject_id: i32, career_id: i32) -> Result<SubjectDetails, StorageError>;

    /// Schedules of every professorship of the subject, ordered by day.
    async fn get_professorship_schedules(
        &self,
        subject_id: i32,
        career_id: i32,
    ) -> Result<Vec<ProfessorshipSchedule>, StorageError>;

    /// Inserts or updates the status row in one transaction.
    async fn update_student_subject(&self, update: &StudentSubjectUpdate) -> Result<(), StorageError>;

    async fn create_student(&self, name: &str, email: &str) -> Result<(), StorageError>;
}
