use reqwest::Client;
use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use super::response::{error_response, json_response, redact};
use crate::{
    config::AppConfig,
    error::{AppError, Result},
    models::CarPreferences,
    services::car_match,
};

/// Status and JSON body produced for one inbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn into_response(self) -> anyhow::Result<Response<Body>> {
        let mut resp = json_response(self.status, &self.body)?;
        if self.status == StatusCode::METHOD_NOT_ALLOWED {
            resp.headers_mut().insert("Allow", "POST".parse()?);
        }
        Ok(resp)
    }
}

/// The match endpoint. Holds the configuration and HTTP client injected at construction.
pub struct MatchHandler {
    config: AppConfig,
    http: Client,
}

impl MatchHandler {
    pub fn new(config: AppConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// Run the whole pipeline. Every failure is turned into a response here; nothing is
    /// returned as an error.
    pub async fn handle(&self, method: &str, body: &[u8]) -> ApiResponse {
        let (status, mut body) = match self.run(method, body).await {
            Ok(reply) => (StatusCode::OK, json!({ "reply": reply })),
            Err(err) => {
                log_failure(&err);
                error_response(&err)
            }
        };
        if let Some(key) = self.config.api_key_str() {
            redact(&mut body, key);
        }
        ApiResponse { status, body }
    }

    async fn run(&self, method: &str, body: &[u8]) -> Result<String> {
        if method != "POST" {
            return Err(AppError::MethodNotAllowed);
        }
        let prefs = CarPreferences::from_json(body)?;
        car_match::recommend(&self.config, self.http.clone(), &prefs).await
    }
}

fn log_failure(err: &AppError) {
    match err {
        AppError::MethodNotAllowed => tracing::info!("rejected non-POST request"),
        AppError::MissingCredential => tracing::error!("GROQ_API_KEY is not configured"),
        AppError::Upstream { status, .. } => tracing::warn!(status, "upstream error relayed"),
        AppError::EmptyReply { .. } => tracing::warn!("upstream returned no reply"),
        other => tracing::error!(error = %other, "request failed"),
    }
}
