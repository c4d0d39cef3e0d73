//! 상품 관리 서비스 모듈

pub mod product_service;

pub use product_service::ProductService;
