//! 쇼핑몰 서비스 백엔드
//!
//! 사용자와 상품 카탈로그를 관리하고, 이메일/비밀번호 로그인으로
//! JWT 액세스 토큰을 발급하는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **상품 관리**: 상품 목록/조회/등록/수정/삭제 (등록은 Bearer 토큰 필요)
//! - **사용자 관리**: 회원가입, 조회, 부분 수정, 삭제
//! - **JWT 인증**: `POST /session` 로그인, `{"userId": id}` 페이로드의 HS256 토큰
//! - **저장소 선택**: MongoDB(운영) 또는 인메모리(테스트, 로컬)
//! - **트랜잭션 경계**: 서비스 진입점마다 begin/commit/rollback
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 트랜잭션 범위
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait 객체)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use shop_service_backend::core::registry::ServiceRegistry;
//! use shop_service_backend::routes::configure_all_routes;
//!
//! let registry = ServiceRegistry::in_memory("secret", 4);
//!
//! let app = actix_web::App::new()
//!     .configure(|cfg| registry.configure(cfg))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
