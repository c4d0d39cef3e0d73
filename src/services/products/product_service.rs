//! # 상품 관리 서비스 구현
//!
//! 상품 카탈로그의 조회, 등록, 수정, 삭제를 담당합니다.
//!
//! 등록 시 필수 필드는 `name → maker → price` 순서로 검사하며, 첫 번째로 실패한
//! 필드의 메시지로 거절합니다. 검증에 실패하면 아무것도 저장되지 않습니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{run_in_transaction, TransactionManager};
use crate::domain::dto::products::ProductData;
use crate::domain::entities::products::product::Product;
use crate::repositories::products::ProductRepository;
use crate::utils::string_utils::is_valid_string;

pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
    tx: Arc<dyn TransactionManager>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>, tx: Arc<dyn TransactionManager>) -> Self {
        Self { product_repo, tx }
    }

    /// ID 로 상품을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ProductNotFound` - 해당 ID 의 상품이 없음
    pub async fn get_product(&self, id: i64) -> AppResult<Product> {
        run_in_transaction(self.tx.as_ref(), self.find_product(id)).await
    }

    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        run_in_transaction(self.tx.as_ref(), self.product_repo.find_all()).await
    }

    /// 새 상품을 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ProductBadRequest` - `name`, `maker`, `price` 중 누락된 필드가 있음
    pub async fn create_product(&self, data: ProductData) -> AppResult<Product> {
        run_in_transaction(self.tx.as_ref(), self.insert_product(data)).await
    }

    /// 기존 상품의 필드를 요청 값으로 교체합니다.
    ///
    /// `price`는 요청에 값이 있을 때만 교체합니다.
    pub async fn update_product(&self, id: i64, data: ProductData) -> AppResult<Product> {
        run_in_transaction(self.tx.as_ref(), self.modify_product(id, data)).await
    }

    /// 상품을 삭제하고 삭제 직전의 레코드를 반환합니다.
    pub async fn delete_product(&self, id: i64) -> AppResult<Product> {
        run_in_transaction(self.tx.as_ref(), self.remove_product(id)).await
    }

    async fn find_product(&self, id: i64) -> AppResult<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProductNotFound(id))
    }

    async fn insert_product(&self, data: ProductData) -> AppResult<Product> {
        let price = validate_product_data(&data)?;

        let product = self
            .product_repo
            .save(Product::new(data.name, data.maker, price, data.image_url))
            .await?;

        log::info!("상품 등록 완료 - ID: {:?}, 이름: {}", product.id, product.name);

        Ok(product)
    }

    async fn modify_product(&self, id: i64, data: ProductData) -> AppResult<Product> {
        let mut product = self.find_product(id).await?;

        product.apply(data.name, data.maker, data.price, data.image_url);
        let product = self.product_repo.save(product).await?;

        log::info!("상품 수정 완료 - ID: {}", id);

        Ok(product)
    }

    async fn remove_product(&self, id: i64) -> AppResult<Product> {
        let product = self.find_product(id).await?;
        self.product_repo.delete(&product).await?;

        log::info!("상품 삭제 완료 - ID: {}", id);

        Ok(product)
    }
}

/// 필수 필드를 순서대로 확인하고 가격을 돌려줍니다.
fn validate_product_data(data: &ProductData) -> AppResult<i64> {
    if !is_valid_string(&data.name) {
        return Err(AppError::ProductBadRequest("name 값은 필수입니다".to_string()));
    }

    if !is_valid_string(&data.maker) {
        return Err(AppError::ProductBadRequest("maker 값은 필수입니다".to_string()));
    }

    data.price
        .ok_or_else(|| AppError::ProductBadRequest("price 값은 필수입니다".to_string()))
}
