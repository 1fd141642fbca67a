use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{auth::{LoginResponse, RegisterResponse}, catalog::FeaturedTechnician};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CredentialsRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::catalog::locations,
        crate::routes::catalog::appliances,
        crate::routes::catalog::featured_technicians,
        crate::routes::auth::login,
        crate::routes::auth::register,
    ),
    components(
        schemas(
            HealthResponse,
            CredentialsRequest,
            ErrorResponse,
            FeaturedTechnician,
            LoginResponse,
            RegisterResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "catalog"),
        (name = "auth")
    )
)]
pub struct ApiDoc;
