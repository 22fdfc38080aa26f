use std::time::Duration;

use anyhow::{bail, ensure, Context};

use crate::domain::SiteBase;

pub const DEFAULT_FORUM_NEWS_URL: &str = "https://forum.fishingplanet.com/index.php?/forum/62-news/";
pub const DEFAULT_KEYWORD: &str = "drops";
pub const DEFAULT_INTERVAL_MINUTES: u64 = 15;
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, sourced from the environment (plus .env via
/// dotenvy). Missing credentials fail at startup, not at the first poll.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub channel_id: String,
    pub check_interval_minutes: u64,
    pub port: u16,
    pub keyword: String,
    pub forum_news_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let discord_token = require("DISCORD_TOKEN")?;
        let channel_id = require("DISCORD_CHANNEL_ID")?;

        let check_interval_minutes = match optional("CHECK_INTERVAL_MINUTES") {
            Some(raw) => {
                let minutes: u64 = raw
                    .parse()
                    .with_context(|| format!("CHECK_INTERVAL_MINUTES is not a number: {raw:?}"))?;
                ensure!(minutes > 0, "CHECK_INTERVAL_MINUTES must be positive");
                minutes
            }
            None => DEFAULT_INTERVAL_MINUTES,
        };

        let port = match optional("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_token,
            channel_id,
            check_interval_minutes,
            port,
            keyword: optional("DROPS_KEYWORD").unwrap_or_else(|| DEFAULT_KEYWORD.to_string()),
            forum_news_url: optional("FORUM_NEWS_URL")
                .unwrap_or_else(|| DEFAULT_FORUM_NEWS_URL.to_string()),
        })
    }

    pub fn poll_period(&self) -> Duration {
        Duration::from_secs(self.check_interval_minutes * 60)
    }

    /// Scheme+host of the configured listing URL, for absolutizing topic links.
    pub fn site_base(&self) -> anyhow::Result<SiteBase> {
        Ok(SiteBase::new(origin_of(&self.forum_news_url)?))
    }
}

fn require(key: &str) -> anyhow::Result<String> {
    match optional(key) {
        Some(v) => Ok(v),
        None => bail!("{key} is not set (required)"),
    }
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn origin_of(url: &str) -> anyhow::Result<String> {
    let scheme_end = url
        .find("://")
        .with_context(|| format!("forum url missing scheme: {url:?}"))?;
    let rest = &url[scheme_end + 3..];
    let host_end = rest.find('/').unwrap_or(rest.len());
    ensure!(host_end > 0, "forum url missing host: {url:?}");
    Ok(format!("{}{}", &url[..scheme_end + 3], &rest[..host_end]))
}

#[cfg(test)]
mod tests {
    use super::origin_of;

    #[test]
    fn origin_strips_path_and_query() {
        assert_eq!(
            origin_of("https://forum.fishingplanet.com/index.php?/forum/62-news/").unwrap(),
            "https://forum.fishingplanet.com"
        );
    }

    #[test]
    fn origin_without_path() {
        assert_eq!(
            origin_of("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn origin_rejects_missing_scheme() {
        assert!(origin_of("forum.fishingplanet.com/news").is_err());
    }
}
