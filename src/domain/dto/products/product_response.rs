use serde::{Deserialize, Serialize};

use crate::domain::entities::products::product::Product;

/// 상품 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub maker: String,
    pub price: i64,
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let Product {
            id,
            name,
            maker,
            price,
            image_url,
        } = product;

        Self {
            id: id.unwrap_or_default(),
            name,
            maker,
            price,
            image_url,
        }
    }
}
