use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::{AppError, AppResult, PageFetcher};

/// Serves a programmable page instead of hitting the network. Swap the page
/// between cycles to simulate the listing changing upstream.
#[derive(Clone, Default)]
pub struct FakePageFetcher {
    page: Arc<Mutex<Option<String>>>,
}

impl FakePageFetcher {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: Arc::new(Mutex::new(Some(page.into()))),
        }
    }

    /// A fetcher with no page, every fetch fails. Simulates the forum down.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn set_page(&self, page: impl Into<String>) {
        if let Ok(mut guard) = self.page.lock() {
            *guard = Some(page.into());
        }
    }
}

#[async_trait]
impl PageFetcher for FakePageFetcher {
    async fn fetch_page(&self) -> AppResult<String> {
        let guard = self
            .page
            .lock()
            .map_err(|_| AppError::Fetch("lock poisoned".into()))?;
        guard
            .clone()
            .ok_or_else(|| AppError::Fetch("simulated fetch failure".into()))
    }
}
