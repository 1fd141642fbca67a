use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appliance_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub type_id: i32,
    pub type_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, type_name: &str) -> Result<Model, ModelError> {
    if type_name.trim().is_empty() { return Err(ModelError::Validation("type name required".into())); }
    let am = ActiveModel {
        type_name: Set(type_name.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
