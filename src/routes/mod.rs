//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 상품, 사용자, 세션 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 인증은 스코프가 아닌 라우트 단위로 붙입니다. 현재 Bearer 토큰이 필요한
//! 라우트는 `POST /products` 하나이며, 핸들러의 `wrap` 속성으로 지정합니다.
//!
//! ```rust,ignore
//! #[post("", wrap = "AuthMiddleware::required()")]
//! pub async fn create_product(...) -> Result<HttpResponse, AppError> { ... }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| registry.configure(cfg))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 서비스(`web::Data`)는 [`ServiceRegistry::configure`](crate::core::registry::ServiceRegistry::configure)가
/// 먼저 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_product_routes(cfg);
    configure_user_routes(cfg);
    configure_session_routes(cfg);
}

/// 상품 관련 라우트를 설정합니다
///
/// - `GET /products` - 상품 목록
/// - `GET /products/{id}` - 상품 조회
/// - `POST /products` - 상품 등록 (Bearer 토큰 필요)
/// - `PATCH /products/{id}` - 상품 수정
/// - `DELETE /products/{id}` - 상품 삭제
///
/// ```bash
/// curl http://localhost:8080/products/1
/// ```
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .service(handlers::products::get_products)
            .service(handlers::products::get_product)
            .service(handlers::products::create_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product)
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /users`, `GET /users/{id}` - 조회
/// - `POST /users` - 회원가입
/// - `PATCH /users/{id}` - 부분 수정
/// - `DELETE /users/{id}` - 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 로그인 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/session \
///   -H "Content-Type: application/json" \
///   -d '{"email":"tester@example.com","password":"test"}'
/// ```
fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/session")
            .service(handlers::session::login)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "shop_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "shop_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
