pub mod user_request;

pub use user_request::{UserCreateData, UserUpdateData};
