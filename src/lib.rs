pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod observability;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use http::{ApiResponse, MatchHandler};
