//! HTTP client for the adoption service (auth + dog search endpoints).

pub mod client;
pub mod config;
pub mod error;

pub use client::AdoptionClient;
pub use config::AdoptionConfig;
pub use error::{ApiError, ApiErrorKind, ApiResult};
