use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A course section of a career subject.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professorship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub career_subject_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::career_subject::Entity",
        from = "Column::CareerSubjectId",
        to = "crate::career_subject::Column::Id"
    )]
    CareerSubject,
    #[sea_orm(has_many = "crate::schedule::Entity")]
    Schedule,
}

impl Related<crate::career_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CareerSubject.def()
    }
}

impl Related<crate::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, career_subject_id: i32, name: &str) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("professorship name required".into()));
    }
    let am = ActiveModel {
        career_subject_id: Set(career_subject_id),
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
