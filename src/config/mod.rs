//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 한곳에서 관리합니다.
//!
//! - [`data_config`] - 저장소, 서버, 실행 환경, 비밀번호 해싱, Rate Limiting
//! - [`auth_config`] - JWT 서명 비밀키
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 (mongodb | memory)
//! export STORE_BACKEND="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="shop_dev"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 환경 (development, test, staging, production)
//! export ENVIRONMENT="production"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 값에 따라 `main`에서 로드합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
