//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 조회, 등록, 수정, 삭제를 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  get / list / create / update / delete       │
//! │  (모든 진입점은 하나의 트랜잭션 범위)        │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │           dyn UserRepository                 │
//! │  MongoUserRepository | MemoryUserRepository  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 보안
//!
//! - 비밀번호는 bcrypt 로 해싱하여 저장하며 cost 는 [`PasswordConfig`](crate::config::PasswordConfig)를 따릅니다.
//! - 응답 DTO([`UserResponse`])에는 비밀번호 해시가 포함되지 않습니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::transaction::{run_in_transaction, TransactionManager};
use crate::domain::dto::users::request::{UserCreateData, UserUpdateData};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::repositories::users::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 트랜잭션 관리자는 생성 시 주입됩니다. 서비스는 요청마다
/// 레코드를 새로 읽으며 요청 사이에 아무것도 캐시하지 않습니다.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    tx: Arc<dyn TransactionManager>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        tx: Arc<dyn TransactionManager>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            tx,
            bcrypt_cost,
        }
    }

    /// ID 로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 해당 ID 의 사용자가 없음
    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        run_in_transaction(self.tx.as_ref(), self.load_user(id)).await
    }

    pub async fn get_users(&self) -> AppResult<Vec<UserResponse>> {
        run_in_transaction(self.tx.as_ref(), self.list_users()).await
    }

    /// 새 사용자 계정을 생성합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 중복 확인
    /// 2. 비밀번호 해싱 (bcrypt)
    /// 3. 엔티티 생성 및 저장
    ///
    /// # Errors
    ///
    /// * `AppError::EmailDuplicated` - 이미 등록된 이메일
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn create_user(&self, data: UserCreateData) -> AppResult<UserResponse> {
        run_in_transaction(self.tx.as_ref(), self.insert_user(data)).await
    }

    /// 요청에 포함된 필드만 기존 계정에 반영합니다.
    ///
    /// 새 비밀번호가 있으면 해싱 후 교체합니다.
    pub async fn update_user(&self, id: i64, data: UserUpdateData) -> AppResult<UserResponse> {
        run_in_transaction(self.tx.as_ref(), self.modify_user(id, data)).await
    }

    /// 사용자를 삭제하고 삭제 직전의 정보를 반환합니다.
    pub async fn delete_user(&self, id: i64) -> AppResult<UserResponse> {
        run_in_transaction(self.tx.as_ref(), self.remove_user(id)).await
    }

    async fn find_user(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    async fn load_user(&self, id: i64) -> AppResult<UserResponse> {
        Ok(UserResponse::from(self.find_user(id).await?))
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        log::debug!("사용자 목록 조회: {}건", users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn insert_user(&self, data: UserCreateData) -> AppResult<UserResponse> {
        let start = std::time::Instant::now();

        if self.user_repo.exists_by_email(&data.email).await? {
            return Err(AppError::EmailDuplicated(data.email));
        }

        let password_hash = self.hash_password(&data.password)?;
        let user = self
            .user_repo
            .save(User::new(data.name, data.email, password_hash))
            .await?;

        log::info!(
            "사용자 생성 완료 - ID: {:?}, 소요 시간: {:?}",
            user.id,
            start.elapsed()
        );

        Ok(UserResponse::from(user))
    }

    async fn modify_user(&self, id: i64, data: UserUpdateData) -> AppResult<UserResponse> {
        let mut user = self.find_user(id).await?;

        let password_hash = match data.password {
            Some(password) => Some(self.hash_password(&password)?),
            None => None,
        };

        user.merge(data.name, password_hash);
        let user = self.user_repo.save(user).await?;

        log::info!("사용자 수정 완료 - ID: {}", id);

        Ok(UserResponse::from(user))
    }

    async fn remove_user(&self, id: i64) -> AppResult<UserResponse> {
        let user = self.find_user(id).await?;
        self.user_repo.delete(&user).await?;

        log::info!("사용자 삭제 완료 - ID: {}", id);

        Ok(UserResponse::from(user))
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::repositories::users::MemoryUserRepository;

    fn service() -> (UserService, MemoryStore) {
        let store = MemoryStore::new();
        let service = UserService::new(
            Arc::new(MemoryUserRepository::new(store.clone())),
            Arc::new(store.clone()),
            4,
        );
        (service, store)
    }

    fn create_data(email: &str) -> UserCreateData {
        UserCreateData {
            name: "tester".to_string(),
            email: email.to_string(),
            password: "test".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_user_hashes_password() {
        let (service, store) = service();

        let created = service.create_user(create_data("tester@example.com")).await.unwrap();

        assert_eq!(created.name, "tester");
        assert_eq!(created.email, "tester@example.com");

        let stored = store.read().unwrap().users.get(&created.id).cloned().unwrap();
        assert_ne!(stored.password_hash, "test");
        assert!(bcrypt::verify("test", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_create_user_with_duplicated_email() {
        let (service, store) = service();
        service.create_user(create_data("tester@example.com")).await.unwrap();

        let result = service.create_user(create_data("tester@example.com")).await;

        assert!(matches!(result, Err(AppError::EmailDuplicated(email)) if email == "tester@example.com"));
        assert_eq!(store.read().unwrap().users.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_user_not_found() {
        let (service, _) = service();

        assert!(matches!(service.get_user(1000).await, Err(AppError::UserNotFound(1000))));
    }

    #[actix_web::test]
    async fn test_get_users() {
        let (service, _) = service();
        assert!(service.get_users().await.unwrap().is_empty());

        service.create_user(create_data("a@example.com")).await.unwrap();
        service.create_user(create_data("b@example.com")).await.unwrap();

        assert_eq!(service.get_users().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_update_user_merges_and_persists() {
        let (service, store) = service();
        let created = service.create_user(create_data("tester@example.com")).await.unwrap();

        let updated = service
            .update_user(
                created.id,
                UserUpdateData {
                    name: Some("renamed".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.email, "tester@example.com");
        assert_eq!(service.get_user(created.id).await.unwrap().name, "renamed");

        service
            .update_user(
                created.id,
                UserUpdateData {
                    name: None,
                    password: Some("changed".to_string()),
                },
            )
            .await
            .unwrap();

        let stored = store.read().unwrap().users.get(&created.id).cloned().unwrap();
        assert_eq!(stored.name, "renamed");
        assert!(bcrypt::verify("changed", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_update_missing_user_changes_nothing() {
        let (service, store) = service();
        service.create_user(create_data("tester@example.com")).await.unwrap();
        let before = store.read().unwrap().users.clone();

        let result = service.update_user(1000, UserUpdateData::default()).await;

        assert!(matches!(result, Err(AppError::UserNotFound(1000))));
        assert_eq!(store.read().unwrap().users, before);
    }

    #[actix_web::test]
    async fn test_delete_user_returns_snapshot() {
        let (service, _) = service();
        let created = service.create_user(create_data("tester@example.com")).await.unwrap();

        let deleted = service.delete_user(created.id).await.unwrap();

        assert_eq!(deleted, created);
        assert!(matches!(service.get_user(created.id).await, Err(AppError::UserNotFound(_))));
        assert!(matches!(service.delete_user(created.id).await, Err(AppError::UserNotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_missing_user_changes_nothing() {
        let (service, store) = service();
        service.create_user(create_data("tester@example.com")).await.unwrap();
        let before = store.read().unwrap().users.clone();

        let result = service.delete_user(1000).await;

        assert!(matches!(result, Err(AppError::UserNotFound(1000))));
        assert_eq!(store.read().unwrap().users, before);
    }
}
