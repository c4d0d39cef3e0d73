//! 사용자 엔티티
//!
//! 사용자 계정의 영속 표현입니다. 비밀번호는 bcrypt 해시로만 보관합니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 구조와 동일합니다. `id`는 저장 시점에 저장소가 발급하며,
/// 저장 전 엔티티는 `None`을 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    /// 전체 사용자 사이에서 유일
    pub email: String,

    pub password_hash: String,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 만듭니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
        }
    }

    /// 주어진 필드만 덮어씁니다. `None`인 필드는 기존 값을 유지합니다.
    ///
    /// # Arguments
    ///
    /// * `name` - 새 이름
    /// * `password_hash` - 이미 해싱된 새 비밀번호
    pub fn merge(&mut self, name: Option<String>, password_hash: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(password_hash) = password_hash {
            self.password_hash = password_hash;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("Tester".into(), "tester@example.com".into(), "hash".into());

        assert!(user.id.is_none());
        assert_eq!(user.email, "tester@example.com");
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut user = User::new("Tester".into(), "tester@example.com".into(), "hash".into());

        user.merge(Some("Renamed".into()), None);
        assert_eq!(user.name, "Renamed");
        assert_eq!(user.password_hash, "hash");

        user.merge(None, Some("new-hash".into()));
        assert_eq!(user.name, "Renamed");
        assert_eq!(user.password_hash, "new-hash");
        assert_eq!(user.email, "tester@example.com");
    }
}
