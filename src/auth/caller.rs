use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::errors::AppError;

/// Header carrying the caller's user id, set by the gateway in front of
/// this service.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extractor for the calling user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| CurrentUser(id.to_string()))
            .ok_or_else(|| AppError::Unauthorized(format!("Missing {} header", USER_ID_HEADER)));

        ready(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn reads_user_from_header() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, " learner-1 "))
            .to_http_request();

        let user = CurrentUser::extract(&req).await.expect("user present");
        assert_eq!(user.id(), "learner-1");
    }

    #[actix_web::test]
    async fn missing_or_blank_header_is_unauthorized() {
        for req in [
            TestRequest::default().to_http_request(),
            TestRequest::default()
                .insert_header((USER_ID_HEADER, "  "))
                .to_http_request(),
        ] {
            let err = CurrentUser::extract(&req).await.expect_err("no user");
            assert!(matches!(err, AppError::Unauthorized(_)));
        }
    }
}
