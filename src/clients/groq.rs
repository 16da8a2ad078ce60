use std::time::Duration;

use reqwest::{header, Client};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::models::prompt::ChatMessage;

#[derive(Serialize, Debug)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [ChatMessage],
}

/// Raw upstream outcome. Status mapping is left to the caller so the body can be relayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `choices[0].message.content` when it is a non-empty string.
    pub fn reply(&self) -> Option<&str> {
        self.body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

pub struct GroqClient {
    http: Client,
    api_key: SecretString,
    endpoint: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl GroqClient {
    /// `http` is shared across invocations so its connection pool survives warm starts.
    pub fn from_config(config: &AppConfig, http: Client) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(AppError::MissingCredential)?;
        Ok(Self {
            http,
            api_key,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: config.timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<UpstreamResponse> {
        debug_log_preview(messages);
        let request = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages,
        };

        let resp = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(v) => v,
            Err(_) if !status.is_success() => Value::String(text),
            Err(e) => {
                return Err(AppError::Other(anyhow::anyhow!(
                    "Failed to parse Groq response: {e}"
                )))
            }
        };

        tracing::debug!(status = status.as_u16(), model = %self.model, "groq responded");
        Ok(UpstreamResponse { status: status.as_u16(), body })
    }
}

fn debug_log_preview(messages: &[ChatMessage]) {
    for m in messages {
        tracing::debug!(
            role = m.role,
            len = m.content.len(),
            preview = %m.content.chars().take(80).collect::<String>(),
            "outbound message"
        );
    }
}
