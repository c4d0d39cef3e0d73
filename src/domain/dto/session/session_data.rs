use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청
///
/// 이메일 형식은 검사하지 않습니다. 등록되지 않은 식별자는 저장소 조회에서
/// `BadCredentials`로 거절됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 로그인 결과 (발급된 액세스 토큰)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_token: String,
}
