//! # Domain Layer
//!
//! 도메인 계층의 모든 타입을 모아 둔 모듈입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소가 소유하는 레코드 (User, Product)
//! ├── models/     ← 인증 주체, 토큰 클레임 등 값 객체
//! └── dto/        ← HTTP 요청/응답 본문
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
