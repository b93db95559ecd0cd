//! Network provider setup

use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use std::sync::Arc;
use tracing::{info, warn};
use crate::{
    config::Config,
    errors::{BotError, BotResult},
    ConcreteProvider,
};

/// Builds an HTTP provider for `rpc_url` without touching the network.
pub fn build_provider(rpc_url: &str) -> BotResult<Arc<ConcreteProvider>> {
    let url: Url = rpc_url.parse().map_err(|e| BotError::Network {
        message: format!("Invalid RPC URL: {}", rpc_url),
        source: Some(anyhow::anyhow!("{}", e)),
    })?;

    Ok(Arc::new(ProviderBuilder::new().on_http(url).boxed()))
}

/// Builds the provider and checks the gateway answers before any contract
/// read is attempted.
pub async fn setup_provider(config: &Config) -> BotResult<Arc<ConcreteProvider>> {
    let provider = build_provider(&config.rpc_url)?;

    info!("🔗 Connecting to {}...", config.rpc_url);
    let block = provider.get_block_number().await.map_err(|e| {
        warn!("⚠️ Gateway connection failed: {}", e);
        BotError::Network {
            message: format!("Failed to get block number from {}", config.rpc_url),
            source: Some(e.into()),
        }
    })?;

    info!("✅ Connected at block {}", block);
    Ok(provider)
}
