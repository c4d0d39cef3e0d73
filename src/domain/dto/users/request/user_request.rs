//! 사용자 요청 DTO
//!
//! 회원가입과 회원정보 수정 요청 본문을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청
///
/// # Examples
///
/// ```json
/// {
///   "name": "Tester",
///   "email": "tester@example.com",
///   "password": "test1234"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreateData {
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원정보 수정 요청
///
/// 전달된 필드만 반영하는 부분 수정입니다. 이메일은 수정할 수 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdateData {
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: Option<String>,
}
