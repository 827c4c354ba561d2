// Outbound chat notifications through the Telegram bot API.

use {
    crate::config::{RELAY, RelayClientConfig},
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    serde_json::{Value, json},
    std::time::Duration,
};

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver `text` to `chat_id`. Ok only when the API accepted the message.
    async fn send_text(&self, chat_id: &Value, text: &str) -> Result<()>;
}

pub struct TelegramBot {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl TelegramBot {
    pub fn new(token: &str, config: &RelayClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("Failed to build messenger HTTP client")?;
        Ok(Self {
            client,
            token: token.trim().to_string(),
            api_base: RELAY.messenger.api_base.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    // Contains the token: never log it.
    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }
}

#[async_trait]
impl Messenger for TelegramBot {
    async fn send_text(&self, chat_id: &Value, text: &str) -> Result<()> {
        let res = self
            .client
            .post(self.send_message_url())
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            // reqwest errors carry the URL, which carries the token
            .map_err(|e| anyhow::anyhow!("sendMessage request failed: {}", e.without_url()))?;

        if !res.status().is_success() {
            bail!("sendMessage: HTTP {}", res.status().as_u16());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url() {
        let bot = TelegramBot::new(" 123:abc ", &RelayClientConfig::default())
            .unwrap()
            .with_api_base("http://localhost:9000/");
        assert_eq!(bot.send_message_url(), "http://localhost:9000/bot123:abc/sendMessage");
    }
}
