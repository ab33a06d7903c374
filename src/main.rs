//! Entry point wiring CLI dispatch to pipeline modules.

use anyhow::Result;
use topic_atlas::cli::Cli;
use topic_atlas::config::Settings;
use topic_atlas::logging;
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
