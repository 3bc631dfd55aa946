mod client;
mod config;
mod domain;
mod notifier;
mod poller;
mod response;
mod result;

use std::{path::PathBuf, process, time::Duration};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    client::{ClientConfig, PracticumApi},
    config::Settings,
    notifier::TelegramNotifier,
    poller::{RETRY_PERIOD, StatusPoller},
};

/// Telegram notifier for homework review statuses
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a .env file with the required secrets
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Delay between polling cycles, in seconds
    #[arg(long, default_value_t = RETRY_PERIOD.as_secs())]
    interval: u64,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
        },
        None => {
            dotenvy::dotenv().ok();
        },
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "homework status notifier starting up"
    );

    // Startup gate: no network activity with incomplete secrets.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "refusing to start");
            process::exit(1);
        },
    };

    let api = PracticumApi::new(ClientConfig::new(settings.practicum_token.clone()))?;
    let notifier = TelegramNotifier::new(&settings.telegram_token, &settings.telegram_chat_id)?;
    let poller = StatusPoller::new(api, notifier, Duration::from_secs(cli.interval));

    let shutdown = poller.shutdown_sender();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown.send(());
        }
    });

    poller.start().await;
    Ok(())
}
