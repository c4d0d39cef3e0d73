use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::db::memory::MemoryStore;
use crate::domain::entities::products::product::Product;
use crate::repositories::products::ProductRepository;

/// 인메모리 상품 리포지토리
pub struct MemoryProductRepository {
    store: MemoryStore,
}

impl MemoryProductRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.store.read()?.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.store.read()?.products.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> AppResult<Product> {
        let mut tables = self.store.write()?;

        let id = match product.id {
            Some(id) if tables.products.contains_key(&id) => id,
            Some(id) => return Err(AppError::ProductNotFound(id)),
            None => tables.next_product_id(),
        };

        product.id = Some(id);
        tables.products.insert(id, product.clone());

        Ok(product)
    }

    async fn delete(&self, product: &Product) -> AppResult<()> {
        if let Some(id) = product.id {
            self.store.write()?.products.remove(&id);
        }
        Ok(())
    }
}
