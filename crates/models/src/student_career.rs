use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::{Deserialize, Serialize};

/// Enrollment of a student in a career.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_career")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub career_id: i32,
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
        belongs_to = "crate::career::Entity",
        from = "Column::CareerId",
        to = "crate::career::Column::Id"
    )]
    Career,
}

impl Related<crate::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<crate::career::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Career.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn exists<C: ConnectionTrait>(db: &C, student_id: i32, career_id: i32) -> Result<bool, DbErr> {
    let count = Entity::find()
        .filter(Column::StudentId.eq(student_id))
        .filter(Column::CareerId.eq(career_id))
        .count(db)
        .await?;
    Ok(count > 0)
}
