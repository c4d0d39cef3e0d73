//! # 인증 서비스
//!
//! 이메일/비밀번호 로그인과 요청 토큰 검증을 담당합니다.
//!
//! ```text
//! 요청 ──▶ 토큰 없음 ─────────────────────▶ 거절 (401)
//!      └─▶ 토큰 있음 ──▶ verify ──┬─ OK  ─▶ 인가 (user_id)
//!                                 └─ ERR ─▶ 거절 (401)
//! ```
//!
//! 서비스는 상태를 갖지 않으며, 로그인 시 사용자 조회만이 유일한 부수 효과입니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::transaction::{run_in_transaction, TransactionManager};
use crate::domain::dto::session::SessionResponse;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenCodec;

pub struct AuthenticationService {
    user_repo: Arc<dyn UserRepository>,
    codec: TokenCodec,
    tx: Arc<dyn TransactionManager>,
}

impl AuthenticationService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        codec: TokenCodec,
        tx: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { user_repo, codec, tx }
    }

    /// 이메일/비밀번호로 로그인하고 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadCredentials` - 등록되지 않은 이메일이거나 비밀번호 불일치
    pub async fn login(&self, email: &str, password: &str) -> AppResult<SessionResponse> {
        run_in_transaction(self.tx.as_ref(), self.authenticate(email, password)).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<SessionResponse> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패 - 등록되지 않은 이메일: {}", email);
                AppError::BadCredentials(email.to_string())
            })?;

        let matched = bcrypt::verify(password, &user.password_hash)
            .context("비밀번호 검증 실패")?;

        if !matched {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", email);
            return Err(AppError::BadCredentials(email.to_string()));
        }

        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        log::info!("로그인 성공 - 사용자 ID: {}", user_id);

        Ok(SessionResponse {
            access_token: self.codec.issue(user_id)?,
        })
    }

    /// 요청에서 꺼낸 토큰을 검증하고 사용자 ID 를 반환합니다.
    ///
    /// 토큰이 없거나 빈 문자열이면 검증 없이 거절합니다.
    pub fn parse_token(&self, token: Option<&str>) -> AppResult<i64> {
        match token {
            Some(token) if !token.is_empty() => self.codec.verify(token),
            _ => Err(AppError::InvalidAccessToken(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::MemoryUserRepository;

    const SECRET: &str = "12345678901234567890123456789010";

    async fn service_with_user(email: &str, password: &str) -> (AuthenticationService, i64) {
        let store = MemoryStore::new();
        let user_repo = Arc::new(MemoryUserRepository::new(store.clone()));

        let hash = bcrypt::hash(password, 4).unwrap();
        let saved = user_repo
            .save(User::new("tester".to_string(), email.to_string(), hash))
            .await
            .unwrap();

        let service = AuthenticationService::new(
            user_repo,
            TokenCodec::new(SECRET),
            Arc::new(store),
        );

        (service, saved.id.unwrap())
    }

    #[actix_web::test]
    async fn test_login_issues_token_for_user() {
        let (service, user_id) = service_with_user("tester@example.com", "test").await;

        let session = service.login("tester@example.com", "test").await.unwrap();

        assert_eq!(service.parse_token(Some(&session.access_token)).unwrap(), user_id);
    }

    #[actix_web::test]
    async fn test_login_with_unknown_email() {
        let (service, _) = service_with_user("tester@example.com", "test").await;

        let result = service.login("nobody@example.com", "test").await;

        match result {
            Err(AppError::BadCredentials(email)) => assert_eq!(email, "nobody@example.com"),
            other => panic!("Expected BadCredentials, got {:?}", other.map(|s| s.access_token)),
        }
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password() {
        let (service, _) = service_with_user("tester@example.com", "test").await;

        let result = service.login("tester@example.com", "wrong").await;

        assert!(matches!(result, Err(AppError::BadCredentials(_))));
    }

    #[actix_web::test]
    async fn test_parse_token_rejects_missing_or_empty() {
        let (service, _) = service_with_user("tester@example.com", "test").await;

        assert!(matches!(service.parse_token(None), Err(AppError::InvalidAccessToken(_))));
        assert!(matches!(service.parse_token(Some("")), Err(AppError::InvalidAccessToken(_))));
        assert!(matches!(
            service.parse_token(Some("garbage")),
            Err(AppError::InvalidAccessToken(_))
        ));
    }
}
