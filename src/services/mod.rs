//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 계약(`dyn UserRepository`, `dyn ProductRepository`)과
//! 트랜잭션 관리자를 생성자로 주입받으며, 공개 메서드 하나가 하나의
//! 트랜잭션 범위가 됩니다. 조립은 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 담당합니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - 상품 카탈로그 관리
//! - JWT 토큰 기반 로그인 및 요청 인증
//!
//! # Examples
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::in_memory("secret", 4);
//! let product = registry.products().get_product(1).await?;
//! ```

pub mod users;
pub mod products;
pub mod auth;
