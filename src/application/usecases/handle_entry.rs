use std::sync::{Arc, Mutex};

use crate::application::{AppError, AppResult, Notifier};
use crate::domain::{render_announcement, Decision, Entry, TrackedState};

/// Drive one selected entry (or none) through the change detector and map the
/// decision to a notification. The single entry point for both the poll cycle
/// and the manual command surface, so there is no shadow state anywhere.
#[derive(Clone)]
pub struct HandleEntryUseCase {
    pub state: Arc<Mutex<TrackedState>>,
    pub notifier: Arc<dyn Notifier>,
}

impl HandleEntryUseCase {
    pub async fn execute(&self, selected: Option<&Entry>) -> AppResult<Decision> {
        let decision = self.lock_state()?.observe(selected);

        match (&decision, selected) {
            (Decision::Nothing, _) | (_, None) => {
                tracing::info!("no matching topic found, nothing to do");
            }
            (Decision::Baseline, Some(entry)) => {
                tracing::info!(title = %entry.title, "baseline established, no notification sent");
            }
            (Decision::Unchanged, Some(_)) => {
                tracing::info!("no new campaign since last check");
            }
            (Decision::NotifyQuiet, Some(entry)) => {
                // Already pinged loudly for this URL; announce without the mention.
                self.notifier
                    .notify(&render_announcement(entry, false))
                    .await?;
                tracing::info!(title = %entry.title, "campaign already pinged, quiet notice sent");
            }
            (Decision::NotifyLoud, Some(entry)) => {
                // Commit the notified guard only after confirmed delivery, so a
                // failed send is retried on the next differing poll.
                self.notifier
                    .notify(&render_announcement(entry, true))
                    .await?;
                self.lock_state()?.commit_notified(&entry.url);
                tracing::info!(title = %entry.title, url = %entry.url, "new campaign announced");
            }
        }

        Ok(decision)
    }

    fn lock_state(&self) -> AppResult<std::sync::MutexGuard<'_, TrackedState>> {
        self.state
            .lock()
            .map_err(|_| AppError::State("lock poisoned".into()))
    }
}
