//! 인증된 사용자 정보
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰 검증에 성공하면
//! 요청 extensions 에 저장하고, 핸들러는 추출자로 꺼내 씁니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// 토큰에서 확인된 요청 주체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// 핸들러 인자로 `AuthenticatedUser`를 받을 수 있게 합니다.
///
/// 미들웨어를 거치지 않은 라우트에서 사용하면 401 을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// #[post("", wrap = "AuthMiddleware::required()")]
/// async fn create_product(user: AuthenticatedUser, ...) -> Result<HttpResponse, AppError> {
///     log::info!("상품 등록 요청 - 사용자 ID: {}", user.user_id);
///     ...
/// }
/// ```
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
