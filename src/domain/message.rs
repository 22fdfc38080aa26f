use super::Entry;

/// Companion link reminding players to connect their game account to Twitch.
pub const TWITCH_LINK: &str = "https://twitch.fishingplanet.com/";

/// Render the announcement body for a campaign entry. `loud` prefixes the
/// broadcast mention so the whole channel gets pinged.
pub fn render_announcement(entry: &Entry, loud: bool) -> String {
    let body = [
        "🎣 **New Twitch Drops campaign for Fishing Planet!**".to_string(),
        String::new(),
        format!("📢 **{}**", entry.title),
        format!("🔗 Details: {}", entry.url),
        String::new(),
        "Remember to link your game account to Twitch:".to_string(),
        TWITCH_LINK.to_string(),
    ]
    .join("\n");

    if loud {
        format!("@everyone\n{body}")
    } else {
        body
    }
}
