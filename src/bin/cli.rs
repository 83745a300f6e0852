//! Homework notifier CLI
//!
//! Runs the polling loop until killed or until a fatal error.

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use homework_notifier::{
    error::{AppError, Result},
    models::Config,
    pipeline::PollLoop,
    services::{Notifier, PracticumClient, TelegramSender},
    utils::{http, log::CRITICAL},
};

/// Forwards homework review status changes to Telegram
#[derive(Parser, Debug)]
#[command(name = "homework-notifier", version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run a single polling cycle and exit
    #[arg(long)]
    once: bool,
}

/// Main entry point for the notifier.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    homework_notifier::utils::log::init(cli.verbose, cli.log_file.as_deref())
        .map_err(|e| AppError::config(format!("cannot open log file: {e}")))?;

    log::info!("Checking tokens...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!(target: CRITICAL, "{e}");
            return Err(e);
        }
    };
    log::debug!("Loaded configuration: {config:?}");

    log::info!("Starting bot...");
    let source = PracticumClient::new(&config, http::create_client()?);
    let notifier = Notifier::new(TelegramSender::new(&config));
    let mut poll = PollLoop::new(source, notifier, Utc::now().timestamp(), config.retry_period);

    if cli.once {
        poll.run_cycle().await?;
        log::info!("Single cycle complete, cursor at {}", poll.cursor());
        return Ok(());
    }

    poll.run().await
}
