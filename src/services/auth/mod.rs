//! 인증 서비스 모듈
//!
//! - [`TokenCodec`] - HS256 토큰 발급/검증 (`{"userId": id}` 페이로드, 만료 없음)
//! - [`AuthenticationService`] - 이메일/비밀번호 로그인, 요청 토큰 해석
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthenticationService, TokenCodec};
//!
//! let codec = TokenCodec::new(&JwtConfig::secret());
//! let service = AuthenticationService::new(user_repo, codec, tx);
//!
//! let session = service.login("tester@example.com", "test").await?;
//! let user_id = service.parse_token(Some(&session.access_token))?;
//! ```

pub mod token_service;
pub mod authentication_service;

pub use token_service::*;
pub use authentication_service::*;
