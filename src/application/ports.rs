use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("notifier error: {0}")]
    Notifier(String),
    #[error("chat feed error: {0}")]
    Chat(String),
    #[error("state error: {0}")]
    State(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Fetch the raw listing page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self) -> AppResult<String>;
}

/// Deliver a rendered message to the configured channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> AppResult<()>;
}

/// One inbound chat message, reduced to what the command surface needs.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub id: String,
    pub content: String,
    pub author_is_bot: bool,
}

/// Read inbound chat messages so manual commands can be picked up.
#[async_trait]
pub trait ChatFeed: Send + Sync {
    /// Id of the newest message in the channel, used to seed the cursor so
    /// history is not replayed at startup. `None` for an empty channel.
    async fn latest_message_id(&self) -> AppResult<Option<String>>;

    /// Messages strictly after `after`, oldest first.
    async fn messages_after(&self, after: &str) -> AppResult<Vec<InboundMessage>>;
}
