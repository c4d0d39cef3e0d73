//! # 사용자 리포지토리 (MongoDB)
//!
//! `users` 컬렉션에 대한 [`UserRepository`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `email_unique` - 이메일 유니크 인덱스. 동시 회원가입 시 중복을 저장소 수준에서 막습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::users::UserRepository;

const COLLECTION_NAME: &str = "users";

/// MongoDB 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 컬렉션 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.collection()
            .find_one(doc! { "_id": id })
            .await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection()
            .find_one(doc! { "email": email })
            .await?)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "email": email })
            .limit(1)
            .await?;

        Ok(count > 0)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .await?;

                if result.matched_count == 0 {
                    return Err(AppError::UserNotFound(id));
                }
            }
            None => {
                let id = self.db.next_sequence(COLLECTION_NAME).await?;
                user.id = Some(id);

                self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(|e| match *e.kind {
                        // 유니크 인덱스 위반 (E11000)
                        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref we))
                            if we.code == 11000 => AppError::EmailDuplicated(user.email.clone()),
                        _ => AppError::DatabaseError(e.to_string()),
                    })?;
            }
        }

        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let Some(id) = user.id else {
            return Ok(());
        };

        self.collection()
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(())
    }
}
