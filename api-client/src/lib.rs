pub mod client;
pub mod config;
pub mod error;

pub use client::PlayerApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
