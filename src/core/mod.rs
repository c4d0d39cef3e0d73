//! # Core Module
//!
//! 애플리케이션 전역에서 쓰는 기반 구성 요소입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `ResponseError` 구현이 상태 코드/메시지로의 유일한 변환 지점
//! - **자동 변환**: thiserror 기반, MongoDB 에러 `From` 변환
//!
//! ### [`transaction`] - 트랜잭션 경계
//! - **TransactionManager / Transaction**: 저장소별 begin/commit/rollback
//! - **run_in_transaction**: 서비스 진입점을 감싸는 스코프 헬퍼
//!
//! ### [`registry`] - 서비스 조립
//! - **ServiceRegistry**: 저장소 → 리포지토리 → 서비스 순서로 조립하고
//!   actix `web::Data`로 등록
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! // 핸들러에서 자동 HTTP 응답 변환
//! async fn get_product(
//!     path: web::Path<i64>,
//!     product_service: web::Data<ProductService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let product = product_service.get_product(path.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
//! }
//! ```

pub mod errors;
pub mod transaction;
pub mod registry;

pub use errors::*;
pub use registry::*;
