use dropwatch::domain::{Decision, Entry, TrackedState};

fn entry(title: &str, url: &str) -> Entry {
    Entry {
        title: title.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn nothing_selected_is_a_noop() {
    let mut state = TrackedState::new();
    assert_eq!(state.observe(None), Decision::Nothing);
    assert_eq!(state.last_seen_title(), None);
    assert_eq!(state.last_notified_id(), None);
}

#[test]
fn first_observation_sets_baseline_without_notifying() {
    let mut state = TrackedState::new();
    let e = entry("Alpha Drops Campaign", "https://f/topic/1");

    assert_eq!(state.observe(Some(&e)), Decision::Baseline);
    assert_eq!(state.last_seen_title(), Some("Alpha Drops Campaign"));
    assert_eq!(state.last_notified_id(), None);
}

#[test]
fn repeated_title_is_unchanged_and_state_stable() {
    let mut state = TrackedState::new();
    let e = entry("Alpha Drops Campaign", "https://f/topic/1");

    state.observe(Some(&e));
    assert_eq!(state.observe(Some(&e)), Decision::Unchanged);
    assert_eq!(state.observe(Some(&e)), Decision::Unchanged);
    assert_eq!(state.last_seen_title(), Some("Alpha Drops Campaign"));
    assert_eq!(state.last_notified_id(), None);
}

#[test]
fn loud_ping_fires_at_most_once_per_url() {
    let mut state = TrackedState::new();
    let e1 = entry("Alpha Drops Campaign", "https://f/topic/1");
    let e2 = entry("Beta Drops Campaign", "https://f/topic/2");

    assert_eq!(state.observe(Some(&e1)), Decision::Baseline);
    assert_eq!(state.observe(Some(&e2)), Decision::NotifyLoud);
    state.commit_notified(&e2.url);
    assert_eq!(state.last_notified_id(), Some("https://f/topic/2"));

    // Same topic renamed upstream: different title, same url. Quiet only.
    let e3 = entry("Beta Drops Campaign V2", "https://f/topic/2");
    assert_eq!(state.observe(Some(&e3)), Decision::NotifyQuiet);
    assert_eq!(state.last_seen_title(), Some("Beta Drops Campaign V2"));
    assert_eq!(state.last_notified_id(), Some("https://f/topic/2"));
}

#[test]
fn uncommitted_loud_retries_only_on_a_differing_title() {
    let mut state = TrackedState::new();
    let e1 = entry("Alpha Drops Campaign", "https://f/topic/1");
    let e2 = entry("Beta Drops Campaign", "https://f/topic/2");

    state.observe(Some(&e1));
    assert_eq!(state.observe(Some(&e2)), Decision::NotifyLoud);
    // Delivery failed: the caller never committed. The title still advanced,
    // so the same entry does not re-trigger...
    assert_eq!(state.observe(Some(&e2)), Decision::Unchanged);

    // ...but a later change goes loud again because the guard is still unset.
    let e3 = entry("Gamma Drops Campaign", "https://f/topic/3");
    assert_eq!(state.observe(Some(&e3)), Decision::NotifyLoud);
    assert_eq!(state.last_notified_id(), None);
}
