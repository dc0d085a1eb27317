//! hookchat CLI: chat with the configured webhook from a terminal.
//! Config from env and optional CLI args.

mod providers;
mod repl;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use hookchat_conversation::ChatController;
use hookchat_store::{load_or_create_session_id, SqliteKvStore};
use hookchat_webhook::{WebhookClient, WebhookConfig};
use tracing::info;

use providers::{EnvLocationProvider, StderrNotifier};

#[derive(Parser)]
#[command(name = "hookchat")]
#[command(about = "Webhook chat client: text, location, and file messages from a terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Webhook endpoint (overrides WEBHOOK_URL).
    #[arg(short, long)]
    url: Option<String>,

    /// Key-value database path (overrides HOOKCHAT_DB).
    #[arg(long)]
    db: Option<String>,
}

fn webhook_config(url_override: Option<String>) -> Result<WebhookConfig> {
    match url_override {
        Some(url) => {
            let mut config = WebhookConfig::with_url(url);
            if let Some(timeout) = std::env::var("WEBHOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
            {
                config = config.with_timeout(Duration::from_secs(timeout));
            }
            Ok(config)
        }
        None => WebhookConfig::from_env(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_file = std::env::var("LOG_FILE").ok();
    hookchat_core::init_tracing(log_file.as_deref())?;

    let config = webhook_config(cli.url)?;

    let db_path = cli
        .db
        .or_else(|| std::env::var("HOOKCHAT_DB").ok())
        .unwrap_or_else(|| "hookchat.db".to_string());
    let store = SqliteKvStore::new(&db_path)
        .await
        .with_context(|| format!("Failed to open kv store at {}", db_path))?;

    let session_id = load_or_create_session_id(&store).await?;
    info!(session_id = %session_id, webhook_url = %config.url, "Starting hookchat");

    let mut controller = ChatController::new(
        session_id,
        Arc::new(WebhookClient::new(config)),
        Arc::new(EnvLocationProvider),
        Arc::new(StderrNotifier),
    );

    if let Some(pacing) = std::env::var("REPLY_PACING_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        controller = controller.with_reply_pacing(Duration::from_millis(pacing));
    }

    repl::run(&mut controller, &store).await
}
