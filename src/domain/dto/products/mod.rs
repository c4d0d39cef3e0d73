//! 상품 API 요청/응답 DTO

pub mod product_data;
pub mod product_response;

pub use product_data::ProductData;
pub use product_response::ProductResponse;
