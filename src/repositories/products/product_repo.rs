//! # 상품 리포지토리 (MongoDB)
//!
//! `products` 컬렉션에 대한 [`ProductRepository`] 구현입니다.
//! ID 는 `counters` 컬렉션의 `products` 시퀀스에서 발급합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::products::product::Product;
use crate::repositories::products::ProductRepository;

const COLLECTION_NAME: &str = "products";

/// MongoDB 상품 리포지토리
pub struct MongoProductRepository {
    db: Arc<Database>,
}

impl MongoProductRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.get_database().collection::<Product>(COLLECTION_NAME)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.collection()
            .find_one(doc! { "_id": id })
            .await?)
    }

    async fn save(&self, mut product: Product) -> AppResult<Product> {
        match product.id {
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &product)
                    .await?;

                if result.matched_count == 0 {
                    return Err(AppError::ProductNotFound(id));
                }
            }
            None => {
                product.id = Some(self.db.next_sequence(COLLECTION_NAME).await?);

                self.collection()
                    .insert_one(&product)
                    .await?;
            }
        }

        Ok(product)
    }

    async fn delete(&self, product: &Product) -> AppResult<()> {
        let Some(id) = product.id else {
            return Ok(());
        };

        self.collection()
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(())
    }
}
