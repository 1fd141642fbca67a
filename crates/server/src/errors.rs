use std::borrow::Cow;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::auth::domain::MISSING_FIELDS;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_QUERY: &str = "Invalid query string";

/// JSON error body `{"error": ...}`. Messages are fixed strings chosen by the
/// handler; backend error text only ever goes to the log.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    message: Cow<'static, str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a service failure. `fallback` is the client-facing text for
    /// store and internal failures.
    pub fn from_service(err: ServiceError, fallback: &'static str) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
            other => {
                error!(code = other.code(), error = %other, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }

    /// An unreadable credentials body counts as missing fields.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "rejected request body");
        Self::new(StatusCode::BAD_REQUEST, MISSING_FIELDS)
    }

    pub fn from_query_rejection(rejection: QueryRejection) -> Self {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "rejected query string");
        Self::new(StatusCode::BAD_REQUEST, INVALID_QUERY)
    }

    pub fn status(&self) -> StatusCode { self.status }

    pub fn message(&self) -> &str { &self.message }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
