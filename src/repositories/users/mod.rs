//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] 계약과 두 구현체를 제공합니다.
//!
//! - [`user_repo::MongoUserRepository`] - `users` 컬렉션
//! - [`memory_user_repo::MemoryUserRepository`] - [`MemoryStore`](crate::db::memory::MemoryStore) 테이블

pub mod user_repo;
pub mod memory_user_repo;

pub use user_repo::MongoUserRepository;
pub use memory_user_repo::MemoryUserRepository;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

/// 사용자 저장소 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// `id`가 없으면 새 ID 를 발급해 삽입하고, 있으면 해당 레코드를 교체합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 레코드의 `id`를 키로 삭제합니다.
    async fn delete(&self, user: &User) -> AppResult<()>;
}
