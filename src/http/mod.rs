pub mod handler;
pub mod response;

pub use handler::{ApiResponse, MatchHandler};
