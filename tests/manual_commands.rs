use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use dropwatch::application::usecases::{
    CommandLoopUseCase, HandleEntryUseCase, FORCE_COMMAND, TEST_COMMAND,
};
use dropwatch::application::{AppResult, ChatFeed, InboundMessage, Notifier};
use dropwatch::domain::{Decision, Entry, TrackedState};

#[derive(Clone, Default)]
struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> AppResult<()> {
        self.sent.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

struct EmptyFeed;

#[async_trait]
impl ChatFeed for EmptyFeed {
    async fn latest_message_id(&self) -> AppResult<Option<String>> {
        Ok(None)
    }

    async fn messages_after(&self, _after: &str) -> AppResult<Vec<InboundMessage>> {
        Ok(vec![])
    }
}

fn setup(notifier: RecordingNotifier) -> (CommandLoopUseCase, Arc<Mutex<TrackedState>>) {
    let state = Arc::new(Mutex::new(TrackedState::new()));
    let shared: Arc<dyn Notifier> = Arc::new(notifier);
    let cmd = CommandLoopUseCase {
        feed: Arc::new(EmptyFeed),
        handle: HandleEntryUseCase {
            state: state.clone(),
            notifier: shared.clone(),
        },
        notifier: shared,
        poll_period: Duration::from_secs(10),
    };
    (cmd, state)
}

#[tokio::test]
async fn testdrops_renders_without_touching_state() {
    let notifier = RecordingNotifier::default();
    let (cmd, state) = setup(notifier.clone());

    cmd.dispatch_command(TEST_COMMAND).await.unwrap();

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(!sent[0].starts_with("@everyone"));
    assert!(sent[0].contains("TEST"));

    let state = state.lock().unwrap();
    assert_eq!(state.last_seen_title(), None);
    assert_eq!(state.last_notified_id(), None);
}

#[tokio::test]
async fn forceping_runs_through_the_real_detector() {
    let notifier = RecordingNotifier::default();
    let (cmd, state) = setup(notifier.clone());

    // Seed a baseline through the same detector the poll cycle uses.
    let seeded = Entry {
        title: "Alpha Drops Campaign".to_string(),
        url: "https://forum.fishingplanet.com/topic/1-alpha".to_string(),
    };
    assert_eq!(
        cmd.handle.execute(Some(&seeded)).await.unwrap(),
        Decision::Baseline
    );
    assert!(notifier.sent().is_empty());

    // First force ping: differing title and url, so the guard fires loudly.
    cmd.dispatch_command(FORCE_COMMAND).await.unwrap();
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("@everyone\n"));
    assert_eq!(
        state.lock().unwrap().last_notified_id(),
        Some("https://twitch.fishingplanet.com/?forced=1")
    );

    // Second force ping: same synthetic title as last seen. No ping, just a
    // short confirmation that the guard held.
    cmd.dispatch_command(FORCE_COMMAND).await.unwrap();
    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    assert!(!sent[1].starts_with("@everyone"));
    assert!(sent[1].contains("already notified"));
}

#[tokio::test]
async fn forceping_on_a_fresh_process_reports_the_baseline() {
    let notifier = RecordingNotifier::default();
    let (cmd, state) = setup(notifier.clone());

    cmd.dispatch_command(FORCE_COMMAND).await.unwrap();

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(!sent[0].starts_with("@everyone"));
    assert!(sent[0].contains("baseline"));

    let state = state.lock().unwrap();
    assert_eq!(state.last_seen_title(), Some("Forced Twitch Drops campaign (TEST)"));
    assert_eq!(state.last_notified_id(), None);
}

#[tokio::test]
async fn unrelated_messages_are_ignored() {
    let notifier = RecordingNotifier::default();
    let (cmd, state) = setup(notifier.clone());

    cmd.dispatch_command("hello there").await.unwrap();
    cmd.dispatch_command("!unknown").await.unwrap();

    assert!(notifier.sent().is_empty());
    assert_eq!(state.lock().unwrap().last_seen_title(), None);
}
