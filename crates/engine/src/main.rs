//! Threadwatch - headless unread badge poller.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threadwatch_engine::infrastructure::{
    app_settings::BadgeSettings,
    badge_sink::TracingBadgeSink,
    clock::SystemClock,
    identity::StaticIdentity,
    snapshot_file::JsonFileSnapshotSource,
    state_store::SqliteStateRepo,
};
use threadwatch_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "threadwatch_engine=info,threadwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Threadwatch");

    // Load configuration
    let settings = BadgeSettings::from_env();
    let db_path = std::env::var("THREADWATCH_DB").unwrap_or_else(|_| "threadwatch.db".into());
    let snapshot_path =
        std::env::var("THREADWATCH_SNAPSHOT").unwrap_or_else(|_| "snapshot.json".into());

    tracing::info!(db = %db_path, "Opening badge state store");
    let state_repo = SqliteStateRepo::new(&db_path, Arc::new(SystemClock::new()))
        .await
        .with_context(|| format!("opening badge state store at {db_path}"))?;

    let identity = StaticIdentity::from_env("THREADWATCH_USER");
    tracing::info!(snapshot = %snapshot_path, "Reading snapshots from file");

    let app = App::new(
        Arc::new(identity),
        Arc::new(JsonFileSnapshotSource::new(&snapshot_path)),
        Arc::new(state_repo),
        Arc::new(TracingBadgeSink),
        settings,
    );

    // Log every visible change to the unread set.
    if let Some(mut changes) = app.badge.subscribe() {
        let badge = app.badge.clone();
        tokio::spawn(async move {
            while changes.changed().await {
                let unread: Vec<String> =
                    badge.unread_ids().into_iter().map(String::from).collect();
                tracing::info!(?unread, "Unread discussions");
            }
        });
    }

    let cycles = app
        .poller()
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            }
        })
        .await;

    app.dispose();
    tracing::info!(cycles, "Threadwatch stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
