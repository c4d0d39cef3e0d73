//! 로그인(세션) API 요청/응답 DTO

pub mod session_data;

pub use session_data::{SessionRequest, SessionResponse};
