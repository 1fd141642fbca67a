//! Data-access seam. Handlers only ever see `dyn Store`, so tests can swap in
//! a failing or fresh in-memory implementation per case.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod seaorm;

pub use seaorm::SeaOrmStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
}

impl From<models::errors::ModelError> for StoreError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => StoreError::Constraint(msg),
            models::errors::ModelError::Db(msg) => StoreError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self { StoreError::Db(e.to_string()) }
}

/// Technician as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technician {
    pub id: i32,
    pub name: String,
    pub photo: String,
    pub specialization: String,
    pub rating: f64,
    pub description: String,
    pub location: String,
}

impl From<models::technician::Model> for Technician {
    fn from(m: models::technician::Model) -> Self {
        Self {
            id: m.technician_id,
            name: m.name,
            photo: m.photo,
            specialization: m.specialization,
            rating: m.rating,
            description: m.description,
            location: m.location,
        }
    }
}

/// Stored user row; `password_hash` is always a PHC hash string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

impl From<models::user::Model> for UserRecord {
    fn from(m: models::user::Model) -> Self {
        Self { id: m.user_id, email: m.email, password_hash: m.password_hash }
    }
}

/// Query operations over the three record collections.
///
/// Implementations must bind every caller-supplied value as a query
/// parameter; none may splice input into SQL text.
#[async_trait]
pub trait Store: Send + Sync {
    /// Technician locations with duplicates removed.
    async fn list_distinct_locations(&self) -> Result<Vec<String>, StoreError>;

    /// Appliance type names containing `substring` (case-sensitive).
    /// An empty substring matches every row.
    async fn search_appliance_types(&self, substring: &str) -> Result<Vec<String>, StoreError>;

    /// Technicians rated at least `min_rating`, in identifier order, at most `limit`.
    async fn list_featured_technicians(&self, min_rating: f64, limit: u64) -> Result<Vec<Technician>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Persist a user and return the assigned identifier.
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<i32, StoreError>;
}
