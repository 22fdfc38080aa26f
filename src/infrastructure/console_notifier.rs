use async_trait::async_trait;

use crate::application::{AppResult, Notifier};

/// Prints notifications to stdout. Always on; the only channel in --dry-run.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, message: &str) -> AppResult<()> {
        println!("NOTIFY:\n{message}");
        Ok(())
    }
}
