//! Telegram Bot API client

use async_trait::async_trait;
use serde::Serialize;

use homework_common::config::AppConfig;
use homework_common::error::SendError;

use crate::Notifier;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends plain-text messages to a single Telegram chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("api_url", &self.api_url)
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramNotifier {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Build a notifier with its own HTTP client using the configured timeout.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self::new(
            client,
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            config.telegram_chat_id.clone(),
        ))
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn type_name(&self) -> &str {
        "telegram"
    }

    async fn send_text(&self, text: &str) -> Result<(), SendError> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await
            // reqwest errors embed the URL, which carries the bot token.
            .map_err(|e| SendError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("description")?.as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(SendError(format!(
                "Telegram API returned status {}: {}",
                status.as_u16(),
                description
            )));
        }

        tracing::info!(chat_id = %self.chat_id, "Message sent to Telegram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url_trims_trailing_slash() {
        let notifier = TelegramNotifier::new(
            reqwest::Client::new(),
            "https://api.telegram.org/",
            "123:abc",
            "42",
        );
        assert_eq!(
            notifier.send_message_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let notifier =
            TelegramNotifier::new(reqwest::Client::new(), "http://x", "secret-token", "42");
        assert!(!format!("{notifier:?}").contains("secret-token"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = SendMessageRequest {
            chat_id: "42",
            text: "hello",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"chat_id": "42", "text": "hello"})
        );
    }
}
