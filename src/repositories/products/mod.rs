//! 상품 데이터 액세스 계층

pub mod product_repo;
pub mod memory_product_repo;

pub use product_repo::MongoProductRepository;
pub use memory_product_repo::MemoryProductRepository;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::products::product::Product;

/// 상품 저장소 계약
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// `id`가 없으면 새 ID 를 발급해 삽입하고, 있으면 해당 레코드를 교체합니다.
    async fn save(&self, product: Product) -> AppResult<Product>;

    /// 레코드의 `id`를 키로 삭제합니다.
    async fn delete(&self, product: &Product) -> AppResult<()>;
}
