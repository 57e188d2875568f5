use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

pub mod banner;
pub mod department;
pub mod dtos;
mod error;
pub mod favorite;
pub mod notification;
pub mod report;
pub mod ticket;
pub mod ticket_feedback;

pub use error::{ApiError, ApiResult};

const USER_HEADER: &str = "X-User-Id";

/// Caller identity as asserted by the gateway. Requests without the
/// header are rejected with 401.
pub struct AuthenticatedUser(pub String);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(user_header(req).map(AuthenticatedUser).ok_or(ApiError::unauthorized()))
    }
}

fn user_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::ResponseError;

    use super::*;

    #[actix_web::test]
    async fn request_without_user_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedUser::from_request(&req, &mut Payload::None).await;
        let err = result.err().unwrap();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn blank_user_header_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header((USER_HEADER, ""))
            .to_http_request();
        let result = AuthenticatedUser::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn user_header_becomes_the_caller_identity() {
        let req = TestRequest::default()
            .insert_header((USER_HEADER, "qa-lead"))
            .to_http_request();
        let user = AuthenticatedUser::from_request(&req, &mut Payload::None).await.unwrap();
        assert_eq!(user.0, "qa-lead");
    }
}
