use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use domain_content::exception::ContentException;
use domain_notify::exception::NotifyException;
use domain_support::exception::SupportException;
use serde_json::json;

use super::dtos::ValidationErrors;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body shared by every endpoint:
/// `{ "error": { "message": ..., "statusCode": ... } }`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Missing or empty X-User-Id header")
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": { "message": self.message, "statusCode": self.status }
        }))
    }
}

/// Internal failures are logged with their chain and presented opaque.
fn sanitized(status: u16, message: String, source: &dyn std::fmt::Display) -> ApiError {
    if status >= 500 {
        tracing::error!("{source}");
        ApiError::new(status, "Internal server error")
    } else {
        ApiError::new(status, message)
    }
}

impl From<SupportException> for ApiError {
    fn from(e: SupportException) -> Self {
        sanitized(e.status(), e.to_string(), &e)
    }
}

impl From<ContentException> for ApiError {
    fn from(e: ContentException) -> Self {
        sanitized(e.status(), e.to_string(), &e)
    }
}

impl From<NotifyException> for ApiError {
    fn from(e: NotifyException) -> Self {
        sanitized(e.status(), e.to_string(), &e)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        ApiError::new(400, e.to_string())
    }
}
