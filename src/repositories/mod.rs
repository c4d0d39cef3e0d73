//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별로 저장소 계약(trait)을 정의하고, MongoDB 와 인메모리 구현체를 제공합니다.
//! 서비스는 `Arc<dyn UserRepository>` 처럼 계약에만 의존합니다.
//!
//! | 계약 | MongoDB | 인메모리 |
//! |------|---------|----------|
//! | [`UserRepository`](users::UserRepository) | `MongoUserRepository` | `MemoryUserRepository` |
//! | [`ProductRepository`](products::ProductRepository) | `MongoProductRepository` | `MemoryProductRepository` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user = user_repo.find_by_email("tester@example.com").await?;
//! ```

pub mod users;
pub mod products;
