use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::usecases::HandleEntryUseCase;
use crate::application::{AppResult, PageFetcher};
use crate::domain::{extract, select, Decision, SiteBase};

/// One full check: fetch the listing, extract topic entries, select the
/// latest matching one and hand it to the change detector.
#[derive(Clone)]
pub struct PollCycleUseCase {
    pub fetcher: Arc<dyn PageFetcher>,
    pub site: SiteBase,
    pub keyword: String,
    pub handle: HandleEntryUseCase,
}

impl PollCycleUseCase {
    pub async fn execute(&self) -> AppResult<Decision> {
        tracing::info!("checking for new drops campaigns");

        let markup = self.fetcher.fetch_page().await?;
        let entries = extract(&markup, &self.site);
        tracing::debug!(candidates = entries.len(), "topic entries extracted");

        let selected = select(&entries, &self.keyword).cloned();
        if let Some(entry) = &selected {
            tracing::info!(title = %entry.title, "latest matching topic");
        }

        self.handle.execute(selected.as_ref()).await
    }

    /// Run one cycle unless another is already in flight. An overlapping tick
    /// is skipped outright, not queued; a skipped tick returns `None`.
    pub async fn execute_guarded(&self, in_flight: &AtomicBool) -> Option<AppResult<Decision>> {
        if in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("previous poll cycle still in flight, skipping this tick");
            return None;
        }

        let result = self.execute().await;
        in_flight.store(false, Ordering::Release);
        Some(result)
    }
}
