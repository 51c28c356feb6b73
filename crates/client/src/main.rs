//! Market client binary.
//!
//! Loads configuration and content, then reads commands from stdin.
//!
//! ```bash
//! MARKET_CONTENT_DIR=./my-content RUST_LOG=debug cargo run -p market-client
//! ```

use anyhow::Result;
use client_frontend_core::{FrontendConfig, Session};
use market_client::{ClientConfig, HeadlessDriver, Repl, logging};
use market_content::ContentFactory;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    let _guard = logging::setup_logging(
        client_config.log_dir.as_deref(),
        client_config.session_id.as_deref(),
    )?;

    tracing::info!("Starting market client");
    tracing::info!("Asset mode: {}", frontend_config.asset_mode);

    let factory = match &client_config.content_dir {
        Some(dir) => {
            tracing::info!("Content directory: {}", dir.display());
            ContentFactory::new(dir)
        }
        None => ContentFactory::bundled(),
    };
    let session = Session::from_factory(&factory, &frontend_config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Repl::new(session, HeadlessDriver::new()).run(stdin.lock(), stdout.lock())?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
