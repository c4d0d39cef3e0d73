//! Users Entity Module
//!
//! 회원 가입으로 생성되는 [`User`](user::User) 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "Tester".to_string(),
//!     "tester@example.com".to_string(),
//!     password_hash,
//! );
//! ```

pub mod user;

pub use user::*;
