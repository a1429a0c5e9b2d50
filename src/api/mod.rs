// src/api/mod.rs

pub mod error;
pub mod identity;

pub use error::{ApiError, ApiResult};
pub use identity::Identity;
