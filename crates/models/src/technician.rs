use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technicians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub technician_id: i32,
    pub name: String,
    pub photo: String,
    pub specialization: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a technician row; the identifier is assigned on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTechnician {
    pub name: String,
    pub photo: String,
    pub specialization: String,
    pub rating: f64,
    pub description: String,
    pub location: String,
}

pub fn validate_rating(rating: f64) -> Result<(), ModelError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ModelError::Validation(format!("rating {rating} outside 0.0..=5.0")));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, new: NewTechnician) -> Result<Model, ModelError> {
    if new.name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    validate_rating(new.rating)?;
    let am = ActiveModel {
        name: Set(new.name),
        photo: Set(new.photo),
        specialization: Set(new.specialization),
        rating: Set(new.rating),
        description: Set(new.description),
        location: Set(new.location),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
