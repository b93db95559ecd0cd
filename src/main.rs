//! PALA spread monitor - Main Entry Point
//!
//! Runs one monitoring pass against the configured gateway and exits.

use pala_monitor::*;
use anyhow::{Context, Result};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    utils::setup_output_directories()?;
    let _logging_guard = utils::setup_logging()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🌴 PALA Spread Monitor v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Gateway: {}", config.rpc_url);
    info!("   Address Book: {}", config.addr_book_path.display());
    info!("   Exchange Rate: {}", config.exchange_rate);
    info!("   Spread Scan: {} (probes: {:?})", config.enable_spread_scan, config.spread_probe_amounts);
    info!("   Reserve Comparison: {}", config.enable_reserve_comparison);

    if let Err(e) = run(&config).await {
        error!("❌ Monitoring failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    let book = AddressBook::load(&config.addr_book_path)
        .context("Address book unavailable")?;
    let provider = network::setup_provider(config).await?;

    monitor::run_once(&provider, &book, config).await?;
    Ok(())
}
