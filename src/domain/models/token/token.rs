//! JWT 페이로드
//!
//! 토큰에는 사용자 식별자 하나만 담습니다. 만료 클레임(`exp`)은 없습니다.

use serde::{Deserialize, Serialize};

/// JWT 클레임
///
/// 직렬화 형태: `{"userId": 1}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
}
