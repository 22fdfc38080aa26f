use std::sync::Arc;
use std::time::Duration;

use crate::application::usecases::HandleEntryUseCase;
use crate::application::{AppResult, ChatFeed, Notifier};
use crate::domain::{render_announcement, Decision, Entry, TWITCH_LINK};

pub const TEST_COMMAND: &str = "!testdrops";
pub const FORCE_COMMAND: &str = "!forceping";

/// Watch the channel for manual trigger commands and run them.
///
/// `!testdrops` renders a fixed synthetic entry through the normal message
/// template without touching tracked state. `!forceping` feeds a fixed
/// synthetic entry through the real change detector, which makes the
/// at-most-once loud guard observable by hand.
pub struct CommandLoopUseCase {
    pub feed: Arc<dyn ChatFeed>,
    pub handle: HandleEntryUseCase,
    pub notifier: Arc<dyn Notifier>,
    pub poll_period: Duration,
}

impl CommandLoopUseCase {
    pub async fn run(self) {
        let mut cursor = match self.feed.latest_message_id().await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("could not seed command cursor: {e}");
                None
            }
        };

        let mut ticker = tokio::time::interval(self.poll_period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match cursor.clone() {
                None => match self.feed.latest_message_id().await {
                    Ok(id) => cursor = id,
                    Err(e) => tracing::warn!("could not seed command cursor: {e}"),
                },
                Some(after) => match self.feed.messages_after(&after).await {
                    Ok(messages) => {
                        for msg in messages {
                            cursor = Some(msg.id.clone());
                            if msg.author_is_bot {
                                continue;
                            }
                            if let Err(e) = self.dispatch_command(&msg.content).await {
                                tracing::error!("manual command failed: {e}");
                            }
                        }
                    }
                    Err(e) => tracing::warn!("command feed poll failed: {e}"),
                },
            }
        }
    }

    pub async fn dispatch_command(&self, content: &str) -> AppResult<()> {
        match content.trim() {
            TEST_COMMAND => {
                let entry = test_entry();
                self.notifier
                    .notify(&render_announcement(&entry, false))
                    .await?;
                tracing::info!("test announcement sent");
                Ok(())
            }
            FORCE_COMMAND => {
                let decision = self.handle.execute(Some(&forced_entry())).await?;
                // The loud and quiet outcomes already posted a message; for the
                // silent ones, confirm in-channel that the guard held.
                match &decision {
                    Decision::NotifyLoud | Decision::NotifyQuiet => {}
                    Decision::Baseline => {
                        self.notifier
                            .notify("Force ping: baseline established, no notification sent.")
                            .await?;
                    }
                    Decision::Unchanged | Decision::Nothing => {
                        self.notifier
                            .notify("Force ping: already notified, no @everyone.")
                            .await?;
                    }
                }
                tracing::info!(?decision, "force ping ran through the detector");
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn test_entry() -> Entry {
    Entry {
        title: "Twitch Drops TEST campaign for Fishing Planet".to_string(),
        url: TWITCH_LINK.to_string(),
    }
}

fn forced_entry() -> Entry {
    Entry {
        title: "Forced Twitch Drops campaign (TEST)".to_string(),
        url: format!("{TWITCH_LINK}?forced=1"),
    }
}
