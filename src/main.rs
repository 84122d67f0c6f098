use anyhow::{Context, Result};
use clap::Parser;
use job_board::cli::{handle_command, DevhireCli};
use job_board::{AppContext, ClientConfig, Session};
use std::fs::OpenOptions;
use std::process::ExitCode;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = DevhireCli::parse();
    let config = ClientConfig::load()?;

    // Terminal output is for the user, logs go to the file
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Configuration environment: {}", config.environment);
    info!("API: {}", config.api_base_url);
    info!(
        "Placeholder company_id={} recruiter_id={}",
        config.company_id, config.recruiter_id
    );

    let session = match cli.user_id {
        Some(id) => Session::signed_in(id),
        None => Session::anonymous(),
    };

    let mut ctx = AppContext::new(config, session)?;
    handle_command(cli.command, &mut ctx).await
}
