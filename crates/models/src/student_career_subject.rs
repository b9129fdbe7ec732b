use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const STATUS_PENDING: &str = "PENDIENTE";
pub const STATUS_APPROVED: &str = "APROBADA";
pub const STATUSES: [&str; 2] = [STATUS_PENDING, STATUS_APPROVED];
pub const DESCRIPTION_MAX_CHARS: usize = 128;

/// Status of a career subject for one student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_career_subject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub career_subject_id: i32,
    pub status: String,
    pub description: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::student::Entity",
        from = "Column::StudentId",
        to = "crate::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "crate::career_subject::Entity",
        from = "Column::CareerSubjectId",
        to = "crate::career_subject::Column::Id"
    )]
    CareerSubject,
}

impl Related<crate::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<crate::career_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CareerSubject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_status(status: &str) -> Result<(), ModelError> {
    if status.is_empty() {
        return Err(ModelError::Validation("status is required".into()));
    }
    if !STATUSES.contains(&status) {
        return Err(ModelError::Validation(format!(
            "status must be one of [{}]",
            STATUSES.join(" ")
        )));
    }
    Ok(())
}

/// An empty description is allowed and means "no description".
pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ModelError::Validation(format!(
            "description must be at most {DESCRIPTION_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_must_be_known() {
        assert!(validate_status(STATUS_PENDING).is_ok());
        assert!(validate_status(STATUS_APPROVED).is_ok());
        assert!(validate_status("").is_err());
        let err = validate_status("aprobada").unwrap_err();
        assert_eq!(err.to_string(), "validation error: status must be one of [PENDIENTE APROBADA]");
    }

    #[test]
    fn description_length_is_counted_in_characters() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"ñ".repeat(128)).is_ok());
        assert!(validate_description(&"a".repeat(129)).is_err());
    }
}
