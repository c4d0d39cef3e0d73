//! # 문자열 유틸리티
//!
//! 요청 본문의 문자열 필드를 검사하고 정리하는 함수들입니다.

use serde::Deserialize;

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("쥐돌이"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 필드 정리
///
/// 빈 문자열은 None 으로 바꾸고, 그 외의 값은 받은 그대로 둡니다.
pub fn empty_as_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용하며,
/// 빈 문자열과 `null`을 모두 `None`으로 받습니다. 값이 있으면 공백까지 그대로 보존합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct ProductData {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     image_url: Option<String>,
/// }
///
/// // JSON: {"image_url": " mouse.png "} → Some(" mouse.png ")
/// // JSON: {"image_url": ""} → None
/// // JSON: {} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(empty_as_none(opt))
}
