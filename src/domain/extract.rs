use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Entry, SiteBase};

// Anchor scan is deliberately narrow: the listing page is the only input and
// topic links are the only structure we rely on. Attributes are pulled out of
// the open tag separately so the title/aria-label precedence holds regardless
// of attribute order.
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>").unwrap());
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)href\s*=\s*"([^"]*)""#).unwrap());
static TITLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)\btitle\s*=\s*"([^"]*)""#).unwrap());
static ARIA_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)\baria-label\s*=\s*"([^"]*)""#).unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Scan listing markup for topic links and return them as entries,
/// deduplicated by URL, in document order. Malformed markup never fails the
/// scan; anchors it cannot make sense of are simply skipped.
pub fn extract(markup: &str, site: &SiteBase) -> Vec<Entry> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for caps in ANCHOR_RE.captures_iter(markup) {
        let attrs = &caps[1];
        let href = match HREF_RE.captures(attrs) {
            Some(h) => h[1].to_string(),
            None => continue,
        };
        if !is_topic_path(&href) {
            continue;
        }

        // Title precedence: title attribute, then aria-label, then inner text.
        let raw_title = attr_value(&TITLE_ATTR_RE, attrs)
            .or_else(|| attr_value(&ARIA_LABEL_RE, attrs))
            .unwrap_or_else(|| caps[2].to_string());

        let title = normalize_title(&raw_title);
        if title.is_empty() {
            continue;
        }

        let url = normalize_url(&href, site);
        if !seen.insert(url.clone()) {
            continue;
        }
        out.push(Entry { title, url });
    }

    out
}

/// Topic links appear both raw and percent-encoded in the listing.
fn is_topic_path(href: &str) -> bool {
    let h = href.to_ascii_lowercase();
    h.contains("/topic/") || h.contains("%2ftopic%2f")
}

fn attr_value(re: &Regex, attrs: &str) -> Option<String> {
    re.captures(attrs)
        .map(|c| c[1].to_string())
        .filter(|v| !v.is_empty())
}

/// Strip nested tags, collapse whitespace runs, trim ends.
fn normalize_title(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_url(href: &str, site: &SiteBase) -> String {
    if href.starts_with('/') {
        format!("{}{}", site.origin(), href)
    } else if href.starts_with("index.php") {
        format!("{}/{}", site.origin(), href)
    } else {
        href.to_string()
    }
}
