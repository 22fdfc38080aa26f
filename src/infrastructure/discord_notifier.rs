use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::application::{AppError, AppResult, Notifier};

const DISCORD_API: &str = "https://discord.com/api/v10";

/// Sends rendered messages to one Discord channel over the REST API.
pub struct DiscordNotifier {
    client: reqwest::Client,
    token: String,
    channel_id: String,
}

impl DiscordNotifier {
    pub fn new(token: String, channel_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            channel_id,
        }
    }

    fn auth(&self) -> String {
        format!("Bot {}", self.token)
    }

    /// Resolve the channel before sending; an unknown channel id shows up
    /// here as a clear error instead of a generic send failure.
    async fn fetch_channel(&self) -> AppResult<ChannelResp> {
        let url = format!("{DISCORD_API}/channels/{}", self.channel_id);
        let channel: ChannelResp = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.auth())
            .send()
            .await
            .map_err(|e| AppError::Notifier(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Notifier(format!("channel lookup failed: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::Notifier(e.to_string()))?;
        Ok(channel)
    }
}

#[derive(Debug, Deserialize)]
struct ChannelResp {
    id: String,
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateMessage<'a> {
    content: &'a str,
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, message: &str) -> AppResult<()> {
        let channel = self.fetch_channel().await?;
        tracing::debug!(
            channel = %channel.name.as_deref().unwrap_or(&channel.id),
            "delivering notification"
        );

        let url = format!("{DISCORD_API}/channels/{}/messages", self.channel_id);
        self.client
            .post(url)
            .header(AUTHORIZATION, self.auth())
            .json(&CreateMessage { content: message })
            .send()
            .await
            .map_err(|e| AppError::Notifier(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Notifier(format!("send failed: {e}")))?;

        Ok(())
    }
}
