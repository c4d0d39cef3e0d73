//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/
//! │   └── user_request.rs    # 회원가입, 회원정보 수정
//! └── response/
//!     └── user_response.rs   # 사용자 응답 (비밀번호 해시 제외)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
