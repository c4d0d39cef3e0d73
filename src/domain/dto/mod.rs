//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//! 엔티티를 그대로 노출하지 않고, 필드별 명시적 변환(`From`)으로만 응답을 만듭니다.
//!
//! | 모듈 | 요청 | 응답 |
//! |------|------|------|
//! | [`users`] | `UserCreateData`, `UserUpdateData` | `UserResponse` |
//! | [`products`] | `ProductData` | `ProductResponse` |
//! | [`session`] | `SessionRequest` | `SessionResponse` |
//!
//! 요청 구조체는 `validator` derive 로 필드 규칙을 선언하고,
//! 핸들러에서 `payload.validate()`로 검사합니다.

pub mod users;
pub mod products;
pub mod session;

pub use users::*;
pub use products::*;
pub use session::*;
