use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::db::memory::MemoryStore;
use crate::domain::entities::users::user::User;
use crate::repositories::users::UserRepository;

/// 인메모리 사용자 리포지토리
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.store.read()?.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.store.read()?.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.store.read()?
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.store.read()?.users.values().any(|user| user.email == email))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut tables = self.store.write()?;

        let id = match user.id {
            Some(id) if tables.users.contains_key(&id) => id,
            Some(id) => return Err(AppError::UserNotFound(id)),
            None => {
                // 유니크 인덱스와 같은 제약
                if tables.users.values().any(|existing| existing.email == user.email) {
                    return Err(AppError::EmailDuplicated(user.email));
                }
                tables.next_user_id()
            }
        };

        user.id = Some(id);
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        if let Some(id) = user.id {
            self.store.write()?.users.remove(&id);
        }
        Ok(())
    }
}
