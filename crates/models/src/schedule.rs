use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One weekly meeting of a professorship. `day` runs from 1 (Monday) to 7 (Sunday).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub professorship_id: i32,
    pub day: i32,
    pub start_time: Time,
    pub end_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::professorship::Entity",
        from = "Column::ProfessorshipId",
        to = "crate::professorship::Column::Id"
    )]
    Professorship,
}

impl Related<crate::professorship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professorship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    professorship_id: i32,
    day: i32,
    start_time: Time,
    end_time: Time,
) -> Result<Model, ModelError> {
    if end_time <= start_time {
        return Err(ModelError::Validation("schedule must end after it starts".into()));
    }
    let am = ActiveModel {
        professorship_id: Set(professorship_id),
        day: Set(day),
        start_time: Set(start_time),
        end_time: Set(end_time),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
