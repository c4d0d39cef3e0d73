//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키 설정을 관리합니다.
//!
//! 비밀키는 프로세스 시작 시 한 번 읽어 [`TokenCodec`](crate::services::auth::TokenCodec)
//! 생성자에 전달하며, 이후에는 변경되지 않습니다.
//!
//! ```bash
//! export JWT_SECRET="12345678901234567890123456789010"
//! ```

use std::env;

/// 개발용 기본 비밀키 (운영 환경에서는 반드시 `JWT_SECRET`을 설정)
const DEFAULT_JWT_SECRET: &str = "12345678901234567890123456789010";

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .unwrap_or_else(|| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEFAULT_JWT_SECRET.to_string()
            })
    }
}
