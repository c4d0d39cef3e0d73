//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직, 트랜잭션 경계          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 `web::Data<T>` 추출자로 받고, 본문은 `validator`로
//! 검사한 뒤 서비스에 넘깁니다. 실패는 `AppError`로 반환하며
//! `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     payload: web::Json<UserCreateData>,
//!     user_service: web::Data<UserService>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let response = user_service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`products`**: 상품 카탈로그 (`/products`)
//! - **`users`**: 사용자 관리 (`/users`)
//! - **`session`**: 로그인 (`POST /session`)

pub mod products;
pub mod users;
pub mod session;
