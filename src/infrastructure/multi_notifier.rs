use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{AppResult, Notifier};

/// Fan out one message to every configured channel. Best-effort: a failing
/// channel does not stop the others, but the last failure is reported so the
/// caller does not commit the loud-notified guard on a lost delivery.
pub struct MultiNotifier {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl MultiNotifier {
    pub fn new(notifiers: Vec<Arc<dyn Notifier>>) -> Self {
        Self { notifiers }
    }
}

#[async_trait]
impl Notifier for MultiNotifier {
    async fn notify(&self, message: &str) -> AppResult<()> {
        let mut last_err = None;

        for n in &self.notifiers {
            if let Err(e) = n.notify(message).await {
                tracing::error!("notifier channel failed: {e}");
                last_err = Some(e);
            }
        }

        match last_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
