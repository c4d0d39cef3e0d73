//! # Domain Models Module
//!
//! 영속되지 않는 값 객체를 정의합니다.
//!
//! - [`auth`] - 요청 단위로 확인된 인증 주체 ([`AuthenticatedUser`](auth::authenticated_user::AuthenticatedUser))
//! - [`token`] - JWT 페이로드 ([`TokenClaims`](token::token::TokenClaims))

pub mod auth;
pub mod token;
