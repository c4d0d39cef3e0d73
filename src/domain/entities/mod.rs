//! # Domain Entities Module
//!
//! 저장소가 소유하는 영속 레코드를 정의합니다.
//! 각 엔티티는 MongoDB 문서와 1:1 로 매핑되며 (`_id` = 저장소가 발급한 정수 ID),
//! 인메모리 저장소에서도 같은 구조체를 그대로 보관합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, Product)
//! ├── models/       ← 인증 주체, 토큰 클레임
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티 생성과 수정은 필드를 하나씩 나열하는 명시적 생성자/병합 함수로만 수행합니다.

pub mod users;
pub mod products;

pub use users::*;
pub use products::*;
