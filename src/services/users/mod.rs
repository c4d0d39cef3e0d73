//! 사용자 관리 서비스 모듈
//!
//! 사용자 계정의 조회, 등록, 수정, 삭제 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//! - 응답에서 비밀번호 해시 제외
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::UserCreateData;
//!
//! let user_service = UserService::new(user_repo, tx, PasswordConfig::bcrypt_cost());
//! let response = user_service.create_user(UserCreateData { /* ... */ }).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
