mod config;

use clap::Parser as _;
use config::Config;
use eventfold::replay::{chunk_capture, read_capture, replay, write_items};
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
pub async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse().validate()?;
    info!("Replaying capture with config: {:?}", config);

    let capture = read_capture(config.input.as_deref()).await?;
    let chunks = chunk_capture(capture, config.chunk_size);
    let items = replay(chunks, config.buffered).await;
    info!("Parsed {} items", items.len());

    let mut stdout = tokio::io::stdout();
    write_items(&mut stdout, &items, config.pretty).await?;

    Ok(())
}
