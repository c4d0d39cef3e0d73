//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출
//! - [`AuthenticationService::parse_token`](crate::services::auth::AuthenticationService::parse_token)으로 검증
//! - 성공 시 [`AuthenticatedUser`](crate::domain::models::auth::authenticated_user::AuthenticatedUser)를 request extension에 저장
//! - 실패 시 핸들러를 호출하지 않고 `{"error": "Invalid access token"}` (401)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use crate::middlewares::AuthMiddleware;
//!
//! #[post("", wrap = "AuthMiddleware::required()")]
//! async fn create_product(...) -> Result<HttpResponse, AppError> { ... }
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
