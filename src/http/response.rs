use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

const MISSING_KEY_HINT: &str =
    "Set GROQ_API_KEY in Vercel → Settings → Environment Variables (Production), then redeploy.";
const MODEL_HINT: &str = "If the error mentions a model, set GROQ_MODEL to a supported one (e.g. llama-3.3-70b-versatile or llama-3.1-8b-instant).";

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::MethodNotAllowed => (
            StatusCode::METHOD_NOT_ALLOWED,
            json!({"error": "Method not allowed. Use POST."}),
        ),
        AppError::MissingCredential => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "Missing GROQ_API_KEY", "hint": MISSING_KEY_HINT}),
        ),
        AppError::Upstream { status, details } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            json!({
                "error": "Groq request failed",
                "status": status,
                "details": details,
                "hint": MODEL_HINT,
            }),
        ),
        AppError::EmptyReply { details } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "No reply returned from model", "details": details}),
        ),
        AppError::InvalidBody(_) | AppError::Network(_) | AppError::Other(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "Server error", "details": err.to_string()}),
        ),
    }
}

/// Replace every occurrence of `secret` inside string values and object keys.
pub fn redact(value: &mut Value, secret: &str) {
    if secret.is_empty() {
        return;
    }
    match value {
        Value::String(s) if s.contains(secret) => *s = s.replace(secret, "[REDACTED]"),
        Value::Array(items) => items.iter_mut().for_each(|v| redact(v, secret)),
        Value::Object(map) => {
            *map = std::mem::take(map)
                .into_iter()
                .map(|(k, mut v)| {
                    redact(&mut v, secret);
                    (k.replace(secret, "[REDACTED]"), v)
                })
                .collect();
        }
        _ => {}
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}
