use reqwest::Client;

use crate::{
    clients::groq::GroqClient,
    config::AppConfig,
    error::{AppError, Result},
    models::{prompt::build_messages, CarPreferences},
};

pub async fn recommend(config: &AppConfig, http: Client, prefs: &CarPreferences) -> Result<String> {
    let client = GroqClient::from_config(config, http)?;
    let messages = build_messages(prefs);

    tracing::info!(
        model = client.model(),
        picks = prefs.picks.len(),
        prompt_len = messages.last().map_or(0, |m| m.content.len()),
        "requesting car recommendations"
    );

    let upstream = client.complete(&messages).await?;
    if !upstream.is_success() {
        return Err(AppError::Upstream {
            status: upstream.status,
            details: upstream.body,
        });
    }

    match upstream.reply().map(str::to_string) {
        Some(reply) => Ok(reply),
        None => Err(AppError::EmptyReply { details: upstream.body }),
    }
}
