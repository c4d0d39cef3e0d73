//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `PATCH` | `/users/{id}` | 사용자 부분 정보 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! ## 에러 응답
//!
//! 모든 실패는 `{"error": "<message>"}` 본문을 가집니다.
//!
//! | 상황 | 상태 코드 |
//! |------|-----------|
//! | 본문 검증 실패 | 400 |
//! | 이메일 중복 | 400 |
//! | 존재하지 않는 사용자 | 404 |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{UserCreateData, UserUpdateData};
use crate::services::users::UserService;

#[get("")]
pub async fn get_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.get_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// `GET /users/{id}`
///
/// 응답에는 비밀번호 해시가 포함되지 않습니다.
///
/// ```json
/// { "id": 1, "name": "Tester", "email": "tester@example.com" }
/// ```
#[get("/{id}")]
pub async fn get_user(
    path: web::Path<i64>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_user(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Tester",
///   "email": "tester@example.com",
///   "password": "test"
/// }
/// ```
///
/// # 실패 사례
///
/// ### 중복 이메일 (400 Bad Request)
/// ```json
/// { "error": "User email is already existed: tester@example.com" }
/// ```
///
/// # 보안 고려사항
///
/// - 비밀번호는 bcrypt로 해시되어 저장됨
/// - 비밀번호는 평문으로 로그에 기록되지 않음
#[post("")]
pub async fn create_user(
    payload: web::Json<UserCreateData>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 수정 핸들러
///
/// `PATCH /users/{id}`
///
/// 전달된 필드(`name`, `password`)만 반영합니다.
#[patch("/{id}")]
pub async fn update_user(
    path: web::Path<i64>,
    payload: web::Json<UserUpdateData>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = user_service
        .update_user(path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{id}`
#[delete("/{id}")]
pub async fn delete_user(
    path: web::Path<i64>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    user_service.delete_user(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
