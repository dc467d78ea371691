//! Main entry point for the dzyt CLI

use clap::Parser;
use dzyt::cli::{Args, OutputFormatter};
use dzyt::{Pipeline, Settings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let args = Args::parse();
    info!("Starting dzyt with args: {:?}", args);

    let settings = Settings::from_env();
    let formatter = OutputFormatter::new();

    // Fatal errors are already reported on the console; exit status stays 0
    Pipeline::new(settings)
        .execute(&args.playlist_url, &args.output_dir, &formatter)
        .await;

    Ok(())
}

/// Initialize logging system
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Console output owns stdout, so only warnings and errors by default
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
