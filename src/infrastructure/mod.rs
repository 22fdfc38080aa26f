pub mod command_feed;
pub mod console_notifier;
pub mod discord_notifier;
pub mod fake_fetcher;
pub mod forum_fetcher;
pub mod multi_notifier;
