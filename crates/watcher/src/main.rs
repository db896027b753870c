use std::path::PathBuf;

use homework_common::config::AppConfig;
use homework_common::types::PollCursor;
use homework_notifier::TelegramNotifier;
use homework_watcher::client::PracticumClient;
use homework_watcher::logging;
use homework_watcher::watcher::StatusWatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The only place `.env` is read: LOG_FILE must be known before logging starts,
    // and AppConfig::from_env sees the same variables afterwards.
    dotenvy::dotenv().ok();

    // Initialize tracing
    let log_file = std::env::var_os("LOG_FILE")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    logging::init(log_file.as_deref())?;

    tracing::info!("Homework watcher starting...");

    // Load configuration; missing credentials are fatal
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Required environment variable is missing, exiting");
            return Err(e);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let api = PracticumClient::from_config(&config)?;
    let notifier = TelegramNotifier::from_config(&config)?;

    let mut watcher = StatusWatcher::new(api, notifier, PollCursor::now(), config.retry_time);

    // Run until Ctrl+C
    tokio::select! {
        _ = watcher.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework watcher stopped.");
    Ok(())
}
