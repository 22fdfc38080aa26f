/// One candidate forum topic pulled out of the listing page.
/// Identity for dedup purposes is the URL; entries are rebuilt on every poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub url: String,
}

/// Scheme+host of the forum, used to absolutize relative topic links.
#[derive(Clone, Debug)]
pub struct SiteBase {
    origin: String,
}

impl SiteBase {
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// e.g. "https://forum.fishingplanet.com"
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
