use super::Entry;

/// Pick the latest entry whose title contains `keyword`, case-insensitively.
/// Document order is assumed newest-first, so the first match is the latest;
/// no match is a normal outcome.
pub fn select<'a>(entries: &'a [Entry], keyword: &str) -> Option<&'a Entry> {
    let kw = keyword.to_lowercase();
    entries.iter().find(|e| e.title.to_lowercase().contains(&kw))
}
