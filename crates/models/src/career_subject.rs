use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const TYPE_REQUIRED: &str = "OBLIGATORIA";
pub const TYPE_ELECTIVE: &str = "ELECTIVA";

/// A subject as offered by one career.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "career_subject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub career_id: i32,
    pub subject_id: i32,
    pub subject_type: String,
    pub hours: i32,
    pub points: i32,
    /// Subject that must be approved first, if any.
    pub correlative_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::career::Entity",
        from = "Column::CareerId",
        to = "crate::career::Column::Id"
    )]
    Career,
    #[sea_orm(
        belongs_to = "crate::subject::Entity",
        from = "Column::SubjectId",
        to = "crate::subject::Column::Id"
    )]
    Subject,
    #[sea_orm(has_many = "crate::professorship::Entity")]
    Professorship,
}

impl Related<crate::career::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Career.def()
    }
}

impl Related<crate::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<crate::professorship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professorship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewCareerSubject<'a> {
    pub career_id: i32,
    pub subject_id: i32,
    pub subject_type: &'a str,
    pub hours: i32,
    pub points: i32,
    pub correlative_id: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewCareerSubject<'_>) -> Result<Model, ModelError> {
    if new.hours < 0 || new.points < 0 {
        return Err(ModelError::Validation("hours and points must not be negative".into()));
    }
    let am = ActiveModel {
        career_id: Set(new.career_id),
        subject_id: Set(new.subject_id),
        subject_type: Set(new.subject_type.to_string()),
        hours: Set(new.hours),
        points: Set(new.points),
        correlative_id: Set(new.correlative_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, career_id: i32, subject_id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::CareerId.eq(career_id))
        .filter(Column::SubjectId.eq(subject_id))
        .one(db)
        .await
}
