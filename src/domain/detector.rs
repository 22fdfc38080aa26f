use super::Entry;

/// What the tracker remembers between poll cycles. One instance per running
/// bot; lives for the process, nothing is persisted.
#[derive(Clone, Debug, Default)]
pub struct TrackedState {
    last_seen_title: Option<String>,
    last_notified_id: Option<String>,
}

/// Outcome of observing one selected entry against the tracked state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Nothing was selected this cycle.
    Nothing,
    /// First ever observation: establish the baseline, never notify.
    /// Prevents re-announcing whatever is currently live on every restart.
    Baseline,
    /// Same title as last cycle.
    Unchanged,
    /// Title changed but this URL was already announced loudly once;
    /// the topic was likely renamed upstream. No second @everyone.
    NotifyQuiet,
    /// Title changed and this URL has never been announced.
    NotifyLoud,
}

impl TrackedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `last_seen_title` and decide what to do about `selected`.
    ///
    /// Never touches `last_notified_id`: the caller commits that via
    /// [`commit_notified`](Self::commit_notified) only after the loud send is
    /// confirmed, so a delivery failure leaves the guard unset and the next
    /// differing poll retries.
    pub fn observe(&mut self, selected: Option<&Entry>) -> Decision {
        let Some(entry) = selected else {
            return Decision::Nothing;
        };

        match &self.last_seen_title {
            None => {
                self.last_seen_title = Some(entry.title.clone());
                Decision::Baseline
            }
            Some(seen) if *seen == entry.title => Decision::Unchanged,
            Some(_) => {
                self.last_seen_title = Some(entry.title.clone());
                if self.last_notified_id.as_deref() == Some(entry.url.as_str()) {
                    Decision::NotifyQuiet
                } else {
                    Decision::NotifyLoud
                }
            }
        }
    }

    /// Record that a loud notification for `url` was delivered. Once set, that
    /// URL never triggers another loud ping.
    pub fn commit_notified(&mut self, url: &str) {
        self.last_notified_id = Some(url.to_string());
    }

    pub fn last_seen_title(&self) -> Option<&str> {
        self.last_seen_title.as_deref()
    }

    pub fn last_notified_id(&self) -> Option<&str> {
        self.last_notified_id.as_deref()
    }
}
