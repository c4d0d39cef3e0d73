//! # 통합 에러 처리
//!
//! 애플리케이션 전역에서 사용하는 에러 타입을 정의합니다.
//! 도메인 계층에서 발생한 에러는 변환 없이 HTTP 경계까지 전파되며,
//! [`actix_web::ResponseError`] 구현이 상태 코드와 메시지로의 유일한 변환 지점입니다.
//!
//! ## 에러 분류
//!
//! | 분류 | Variant | HTTP |
//! |------|---------|------|
//! | 존재하지 않는 리소스 | `UserNotFound`, `ProductNotFound` | 404 |
//! | 필수 필드 누락 | `ProductBadRequest`, `ValidationError` | 400 |
//! | 이메일 중복 | `EmailDuplicated` | 400 |
//! | 로그인 실패 | `BadCredentials` | 400 |
//! | 토큰 없음/위조 | `InvalidAccessToken` | 401 |
//! | 저장소/내부 오류 | `DatabaseError`, `InternalError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_product(&self, id: i64) -> Result<Product, AppError> {
//!     self.product_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or(AppError::ProductNotFound(id))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// 상품 필수 필드 누락 (메시지에 필드명이 포함됨)
    #[error("{0}")]
    ProductBadRequest(String),

    #[error("User email is already existed: {0}")]
    EmailDuplicated(String),

    #[error("User bad request: {0}")]
    BadCredentials(String),

    /// 토큰이 없거나 서명/클레임이 유효하지 않음
    #[error("Invalid access token")]
    InvalidAccessToken(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::UserNotFound(_) | AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ProductBadRequest(_)
            | AppError::EmailDuplicated(_)
            | AppError::BadCredentials(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidAccessToken(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 덧붙여 `AppError::InternalError`로 변환합니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_not_found_error_response() {
        assert_eq!(AppError::UserNotFound(1).error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::ProductNotFound(1000).error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::ProductBadRequest("name 값은 필수입니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "name 값은 필수입니다");

        let error = AppError::EmailDuplicated("tester@example.com".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_credentials_message() {
        let error = AppError::BadCredentials("unknown@example.com".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("User bad request"));
    }

    #[test]
    fn test_invalid_access_token_error_response() {
        let error = AppError::InvalidAccessToken("a.b.c".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        // 토큰 원문은 응답 메시지에 포함하지 않는다
        assert!(!error.to_string().contains("a.b.c"));
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
