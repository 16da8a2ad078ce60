use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing GROQ_API_KEY")]
    MissingCredential,
    #[error("Groq request failed with status {status}")]
    Upstream { status: u16, details: Value },
    #[error("No reply returned from model")]
    EmptyReply { details: Value },
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Groq request error: {0}")]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
