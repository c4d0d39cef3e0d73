use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 응답에 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            ..
        } = user;

        Self {
            id: id.unwrap_or_default(),
            name,
            email,
        }
    }
}
