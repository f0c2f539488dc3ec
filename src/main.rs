mod client;
mod config;
mod encoding;
mod error;
mod protocol;
mod record;
mod util;
mod writer;

#[cfg(test)]
mod store;

use anyhow::Context;
use clap::Parser;
use config::{Cli, Config};
use tracing::{debug, info};
use util::time::SystemClock;
use writer::RecordWriter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    // Logs go to stderr; stdout carries only the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting agent-writer");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let writer = RecordWriter::new(config.store.clone());
    let mut stdout = std::io::stdout().lock();
    let written = writer
        .write(&config.record, &SystemClock, &mut stdout)
        .await
        .with_context(|| format!("failed to write record to {}", config.store.addr()))?;
    debug!(key = %written.key, payload = %written.payload, "Run complete");

    Ok(())
}
