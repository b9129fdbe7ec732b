use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub uri: Option<String>,
    pub meet: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::career_subject::Entity")]
    CareerSubject,
}

impl Related<crate::career_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CareerSubject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    uri: Option<&str>,
    meet: Option<&str>,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("subject name required".into()));
    }
    let am = ActiveModel {
        name: Set(name.to_string()),
        uri: Set(uri.map(str::to_string)),
        meet: Set(meet.map(str::to_string)),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
