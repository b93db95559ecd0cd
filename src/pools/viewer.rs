//! PalaViewer reads: aggregated price info and the spread scan

use alloy::primitives::{Address, U256};
use tracing::debug;
use crate::{
    contracts::PalaViewer,
    errors::{BotError, BotResult},
    types::{PriceInfo, SpreadSample},
    ConcreteProvider,
};

pub async fn get_price_info(provider: &ConcreteProvider, viewer: Address) -> BotResult<PriceInfo> {
    debug!("Getting price info from PalaViewer at {}", viewer);
    let info = PalaViewer::new(viewer, provider)
        .getPriceInfo()
        .call()
        .await
        .map_err(|e| BotError::contract(viewer, "Failed to call getPriceInfo", e))?;

    Ok(PriceInfo {
        pala_price_in_kusdt: info.palaPriceInKusdt,
        pala_price_in_klay: info.palaPriceInKlay,
        pala_reserve_in_kusdt: info.palaReserveInKusdt,
        kusdt_reserve_in_kusdt: info.kusdtReserveInKusdt,
        pala_reserve_in_klay: info.palaReserveInKlay,
        klay_reserve_in_klay: info.klayReserveInKlay,
    })
}

pub async fn scan_spread(provider: &ConcreteProvider, viewer: Address, amount_in: u64) -> BotResult<SpreadSample> {
    debug!("Scanning spread for input amount {}", amount_in);
    let scan = PalaViewer::new(viewer, provider)
        .scanSpread(U256::from(amount_in))
        .call()
        .await
        .map_err(|e| BotError::contract(viewer, format!("Failed to call scanSpread({})", amount_in), e))?;

    Ok(SpreadSample {
        amount_in,
        output_token: scan.outputToken,
        spread: scan.spread,
    })
}

/// Probes each amount in order. The first failure aborts the scan.
pub async fn scan_spreads(
    provider: &ConcreteProvider,
    viewer: Address,
    amounts: &[u64],
) -> BotResult<Vec<SpreadSample>> {
    let mut samples = Vec::with_capacity(amounts.len());
    for &amount in amounts {
        samples.push(scan_spread(provider, viewer, amount).await?);
    }
    Ok(samples)
}
