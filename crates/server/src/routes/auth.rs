use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::Serialize;
use service::auth::domain::CredentialsInput;
use utoipa::ToSchema;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// Fixed placeholder, not a credential
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(post, path = "/login", tag = "auth", request_body = crate::openapi::CredentialsRequest, responses((status = 200, description = "Logged In", body = LoginResponse), (status = 400, description = "Missing email or password"), (status = 401, description = "Invalid credentials"), (status = 500, description = "Store failure")))]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<CredentialsInput>, JsonRejection>,
) -> Result<Json<LoginResponse>, JsonApiError> {
    let Json(input) = payload.map_err(JsonApiError::from_rejection)?;
    let session = state.auth.login(input).await
        .map_err(|e| JsonApiError::from_service(e, "Error during login"))?;
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".into(),
        token: session.token.into(),
    }))
}

#[utoipa::path(post, path = "/register", tag = "auth", request_body = crate::openapi::CredentialsRequest, responses((status = 200, description = "Registered", body = RegisterResponse), (status = 400, description = "Missing email or password"), (status = 500, description = "Registration failed")))]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<CredentialsInput>, JsonRejection>,
) -> Result<Json<RegisterResponse>, JsonApiError> {
    let Json(input) = payload.map_err(JsonApiError::from_rejection)?;
    state.auth.register(input).await
        .map_err(|e| JsonApiError::from_service(e, "Error during registration"))?;
    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful".into(),
    }))
}
