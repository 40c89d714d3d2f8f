use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::Cli;
use bookshelf::{commands, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (log_path, _guard) = logging::init_logging()?;
    tracing::info!(log = %log_path.display(), "Starting bookshelf");

    let session = bookshelf_auth::open_session().context("Failed to open session")?;

    commands::execute(cli.command, &session).await
}
