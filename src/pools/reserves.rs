//! Pool reserves fetching

use alloy::primitives::{Address, U256};
use tracing::debug;
use crate::{
    config::AddressBook,
    contracts::IPairPool,
    errors::{BotError, BotResult},
    types::{Dex, PoolKind, PoolRef, PoolReserves},
    ConcreteProvider,
};

/// Reads `getReserves()` from a PalaDEX (Uniswap V2 style) pool.
pub async fn get_pool_reserves(provider: &ConcreteProvider, pool: Address) -> BotResult<PoolReserves> {
    let reserves = IPairPool::new(pool, provider)
        .getReserves()
        .call()
        .await
        .map_err(|e| BotError::contract(pool, "Failed to call getReserves", e))?;

    Ok(PoolReserves {
        reserve0: U256::from(reserves.reserve0),
        reserve1: U256::from(reserves.reserve1),
    })
}

/// Reads `getCurrentPool()` from a Klayswap pool.
pub async fn get_current_pool(provider: &ConcreteProvider, pool: Address) -> BotResult<PoolReserves> {
    let current = IPairPool::new(pool, provider)
        .getCurrentPool()
        .call()
        .await
        .map_err(|e| BotError::contract(pool, "Failed to call getCurrentPool", e))?;

    Ok(PoolReserves {
        reserve0: current.reserve0,
        reserve1: current.reserve1,
    })
}

pub fn resolve_pool(book: &AddressBook, dex: Dex, kind: PoolKind) -> BotResult<PoolRef> {
    Ok(PoolRef {
        dex,
        kind,
        address: book.pool(dex, kind)?,
    })
}

/// Fetches reserves using whichever read method the pool's DEX exposes.
pub async fn get_reserves_for(provider: &ConcreteProvider, pool: &PoolRef) -> BotResult<PoolReserves> {
    debug!("Getting reserves for {} {} at {}", pool.dex, pool.kind, pool.address);
    match pool.dex {
        Dex::PalaDex => get_pool_reserves(provider, pool.address).await,
        Dex::Klayswap => get_current_pool(provider, pool.address).await,
    }
}
