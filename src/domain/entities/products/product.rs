use serde::{Deserialize, Serialize};

/// 상품 엔티티 (`products` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    pub maker: String,

    pub price: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(name: String, maker: String, price: i64, image_url: Option<String>) -> Self {
        Self {
            id: None,
            name,
            maker,
            price,
            image_url,
        }
    }

    /// 수정 요청의 값으로 필드를 교체합니다.
    ///
    /// name, maker, image_url 은 그대로 교체하고 price 는 값이 있을 때만 교체합니다.
    /// 빈 문자열 검증은 하지 않습니다.
    pub fn apply(&mut self, name: String, maker: String, price: Option<i64>, image_url: Option<String>) {
        self.name = name;
        self.maker = maker;
        if let Some(price) = price {
            self.price = price;
        }
        self.image_url = image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_fields() {
        let mut product = Product::new("쥐돌이".into(), "냥이월드".into(), 5000, None);
        product.id = Some(1);

        product.apply("쥐순이".into(), "멍이월드".into(), Some(6000), Some("image.png".into()));

        assert_eq!(product.id, Some(1));
        assert_eq!(product.name, "쥐순이");
        assert_eq!(product.maker, "멍이월드");
        assert_eq!(product.price, 6000);
        assert_eq!(product.image_url.as_deref(), Some("image.png"));
    }

    #[test]
    fn test_apply_without_price_keeps_price() {
        let mut product = Product::new("쥐돌이".into(), "냥이월드".into(), 5000, Some("a.png".into()));

        product.apply("쥐돌이".into(), "냥이월드".into(), None, None);

        assert_eq!(product.price, 5000);
        assert!(product.image_url.is_none());
    }
}
