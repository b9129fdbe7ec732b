use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::student_career::Entity")]
    StudentCareer,
    #[sea_orm(has_many = "crate::student_career_subject::Entity")]
    StudentCareerSubject,
}

impl Related<crate::student_career::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCareer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name is required".into()));
    }
    if name.chars().count() > 128 {
        return Err(ModelError::Validation("name must be at most 128 characters".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("student email is required".into()));
    }
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid student email".into()));
    }
    if email.len() > 255 {
        return Err(ModelError::Validation("student email must be at most 255 bytes".into()));
    }
    Ok(())
}

pub fn new_active(name: &str, email: &str) -> ActiveModel {
    ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, email: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    Ok(new_active(name, email).insert(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Email.eq(email)).one(db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Ada").is_ok());
    }

    #[test]
    fn email_is_required_and_looks_like_an_address() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-address").is_err());
        assert!(validate_email("ada@example.com").is_ok());
    }
}
