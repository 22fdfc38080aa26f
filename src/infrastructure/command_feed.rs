use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::application::{AppError, AppResult, ChatFeed, InboundMessage};

const DISCORD_API: &str = "https://discord.com/api/v10";
const PAGE_LIMIT: u32 = 50;

/// Reads channel messages over the Discord REST API so manual commands work
/// without holding a gateway connection open.
pub struct DiscordCommandFeed {
    client: reqwest::Client,
    token: String,
    channel_id: String,
}

impl DiscordCommandFeed {
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

    async fn get_messages(&self, query: &[(&str, String)]) -> AppResult<Vec<MessageResp>> {
        let url = format!("{DISCORD_API}/channels/{}/messages", self.channel_id);
        self.client
            .get(url)
            .header(AUTHORIZATION, self.auth())
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Chat(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Chat(e.to_string()))?
            .json()
            .await
            .map_err(|e| AppError::Chat(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct MessageResp {
    id: String,
    content: String,
    author: AuthorResp,
}

#[derive(Debug, Deserialize)]
struct AuthorResp {
    #[serde(default)]
    bot: bool,
}

#[async_trait]
impl ChatFeed for DiscordCommandFeed {
    async fn latest_message_id(&self) -> AppResult<Option<String>> {
        let messages = self.get_messages(&[("limit", "1".to_string())]).await?;
        Ok(messages.into_iter().next().map(|m| m.id))
    }

    async fn messages_after(&self, after: &str) -> AppResult<Vec<InboundMessage>> {
        let mut messages = self
            .get_messages(&[
                ("limit", PAGE_LIMIT.to_string()),
                ("after", after.to_string()),
            ])
            .await?;

        // Message ids are snowflakes; sort ascending so commands run in the
        // order they were typed regardless of the API's response order.
        messages.sort_by_key(|m| m.id.parse::<u64>().unwrap_or(u64::MAX));

        Ok(messages
            .into_iter()
            .map(|m| InboundMessage {
                id: m.id,
                content: m.content,
                author_is_bot: m.author.bot,
            })
            .collect())
    }
}
