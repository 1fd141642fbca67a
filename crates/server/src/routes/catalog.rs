use axum::{extract::{rejection::QueryRejection, Query, State}, Json};
use serde::{Deserialize, Serialize};
use service::store::Technician;
use utoipa::{IntoParams, ToSchema};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplianceQuery {
    /// Case-sensitive substring; omitted or empty matches every type
    pub query: Option<String>,
}

/// Public view of a technician; the store identifier is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeaturedTechnician {
    pub name: String,
    pub photo: String,
    pub specialization: String,
    pub rating: f64,
    pub description: String,
    pub location: String,
}

impl From<Technician> for FeaturedTechnician {
    fn from(t: Technician) -> Self {
        Self {
            name: t.name,
            photo: t.photo,
            specialization: t.specialization,
            rating: t.rating,
            description: t.description,
            location: t.location,
        }
    }
}

#[utoipa::path(get, path = "/locations", tag = "catalog", responses((status = 200, description = "Distinct technician locations", body = [String]), (status = 500, description = "Store failure")))]
pub async fn locations(State(state): State<ServerState>) -> Result<Json<Vec<String>>, JsonApiError> {
    state.catalog.locations().await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching locations"))
}

#[utoipa::path(get, path = "/appliances", tag = "catalog", params(ApplianceQuery), responses((status = 200, description = "Matching appliance type names", body = [String]), (status = 400, description = "Malformed query string"), (status = 500, description = "Store failure")))]
pub async fn appliances(
    State(state): State<ServerState>,
    query: Result<Query<ApplianceQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, JsonApiError> {
    let Query(q) = query.map_err(JsonApiError::from_query_rejection)?;
    state.catalog.appliance_suggestions(q.query.as_deref()).await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching appliances"))
}

#[utoipa::path(get, path = "/featured-technicians", tag = "catalog", responses((status = 200, description = "Highly rated technicians", body = [FeaturedTechnician]), (status = 500, description = "Store failure")))]
pub async fn featured_technicians(State(state): State<ServerState>) -> Result<Json<Vec<FeaturedTechnician>>, JsonApiError> {
    let technicians = state.catalog.featured_technicians().await
        .map_err(|e| JsonApiError::from_service(e, "Error fetching technicians"))?;
    Ok(Json(technicians.into_iter().map(FeaturedTechnician::from).collect()))
}
