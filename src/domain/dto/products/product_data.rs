use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 상품 생성/수정 요청
///
/// `name`, `maker`가 빠진 본문은 빈 문자열로 받아서 서비스 계층이
/// 필드별 메시지로 거절할 수 있게 합니다.
///
/// # Examples
///
/// ```json
/// {
///   "name": "쥐돌이",
///   "maker": "냥이월드",
///   "price": 5000,
///   "imageUrl": "https://example.com/mouse.png"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    #[serde(default)]
    #[validate(length(min = 1, message = "name 값은 필수입니다"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "maker 값은 필수입니다"))]
    pub maker: String,

    #[validate(required(message = "price 값은 필수입니다"))]
    pub price: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
}
