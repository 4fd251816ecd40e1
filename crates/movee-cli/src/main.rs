//! Terminal client entry point.
use anyhow::Result;
use movee_cli::{CliConfig, MoveeApp, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env()?;
    let _log_guard = logging::init(&config)?;

    MoveeApp::new(config)?.run().await
}
