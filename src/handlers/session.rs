//! # Session HTTP Handlers
//!
//! 이메일/비밀번호로 액세스 토큰을 발급합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::session::SessionRequest;
use crate::services::auth::AuthenticationService;

/// 로그인 (세션 생성)
///
/// `POST /session`
///
/// # 요청 본문
///
/// ```json
/// { "email": "tester@example.com", "password": "test" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "accessToken": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// ## 실패 (400 Bad Request)
/// ```json
/// { "error": "User bad request: tester@example.com" }
/// ```
///
/// 등록되지 않은 이메일과 비밀번호 불일치는 같은 응답으로 처리합니다.
#[post("")]
pub async fn login(
    payload: web::Json<SessionRequest>,
    authentication: web::Data<AuthenticationService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let SessionRequest { email, password } = payload.into_inner();
    let session = authentication.login(&email, &password).await?;

    Ok(HttpResponse::Created().json(session))
}
