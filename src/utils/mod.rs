//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 문자열 필드 검사와 정리
//! - [`display_terminal`] - 서비스 레지스트리 조립 과정 출력

pub mod string_utils;
pub mod display_terminal;
