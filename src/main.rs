use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dropwatch::application::usecases::{CommandLoopUseCase, HandleEntryUseCase, PollCycleUseCase};
use dropwatch::application::Notifier;
use dropwatch::domain::TrackedState;
use dropwatch::infrastructure::{
    command_feed::DiscordCommandFeed, console_notifier::ConsoleNotifier,
    discord_notifier::DiscordNotifier, forum_fetcher::ForumFetcher, multi_notifier::MultiNotifier,
};
use dropwatch::interfaces::{config::Config, liveness};

const COMMAND_POLL_PERIOD: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "dropwatch")]
struct Args {
    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Do not send Discord notifications (console only)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dropwatch=info".parse().unwrap()),
        )
        .init();
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    }
    let args = Args::parse();

    // 1) config, fail fast on anything missing
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };
    let site = match cfg.site_base() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Invalid FORUM_NEWS_URL: {e:#}");
            std::process::exit(1);
        }
    };

    // 2) build infra
    let fetcher = match ForumFetcher::new(cfg.forum_news_url.clone()) {
        Ok(f) => Arc::new(f),
        Err(e) => {
            tracing::error!("Could not build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let mut notifiers: Vec<Arc<dyn Notifier>> = vec![Arc::new(ConsoleNotifier::new())];
    if args.dry_run {
        tracing::warn!("--dry-run enabled: only console output");
    } else {
        notifiers.push(Arc::new(DiscordNotifier::new(
            cfg.discord_token.clone(),
            cfg.channel_id.clone(),
        )));
    }
    let notifier: Arc<dyn Notifier> = Arc::new(MultiNotifier::new(notifiers));

    // 3) usecases, one tracked state for poll and manual paths alike
    let state = Arc::new(Mutex::new(TrackedState::new()));
    let handle = HandleEntryUseCase {
        state,
        notifier: notifier.clone(),
    };
    let poll = PollCycleUseCase {
        fetcher,
        site,
        keyword: cfg.keyword.clone(),
        handle: handle.clone(),
    };

    if args.once {
        if let Err(e) = poll.execute().await {
            tracing::error!("Poll cycle failed: {e}");
            std::process::exit(1);
        }
        tracing::info!("single poll completed");
        return;
    }

    // 4) liveness endpoint for uptime probes
    let port = cfg.port;
    tokio::spawn(async move {
        if let Err(e) = liveness::serve(port).await {
            tracing::error!("liveness server failed: {e:#}");
        }
    });

    // 5) manual command surface
    if !args.dry_run {
        let commands = CommandLoopUseCase {
            feed: Arc::new(DiscordCommandFeed::new(
                cfg.discord_token.clone(),
                cfg.channel_id.clone(),
            )),
            handle,
            notifier,
            poll_period: COMMAND_POLL_PERIOD,
        };
        tokio::spawn(commands.run());
    }

    // 6) poll loop: first tick fires immediately, later ticks are skipped
    // outright if the previous cycle is still in flight (single-flight guard)
    tracing::info!(
        interval_minutes = cfg.check_interval_minutes,
        keyword = %cfg.keyword,
        "polling started"
    );
    let mut ticker = tokio::time::interval(cfg.poll_period());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let in_flight = Arc::new(AtomicBool::new(false));

    loop {
        ticker.tick().await;

        let poll = poll.clone();
        let guard = in_flight.clone();
        tokio::spawn(async move {
            if let Some(Err(e)) = poll.execute_guarded(&guard).await {
                tracing::error!("Poll cycle failed: {e}");
            }
        });
    }
}
