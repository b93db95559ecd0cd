//! Cross-DEX reserve ratio comparison for a single pair

use rust_decimal::Decimal;
use crate::{
    errors::{BotError, BotResult},
    types::{PoolRef, PoolReserves, ReserveRatioComparison},
    utils::to_decimal,
};

/// Token decimals of a pair, in reserve order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairDecimals {
    pub token0: u32,
    pub token1: u32,
}

/// `reserve0 / reserve1` and its inverse, both in whole-token units.
fn reserve_ratios(pool: &PoolRef, reserves: &PoolReserves, decimals: PairDecimals) -> BotResult<(Decimal, Decimal)> {
    let amount0 = to_decimal(reserves.reserve0, decimals.token0)?;
    let amount1 = to_decimal(reserves.reserve1, decimals.token1)?;

    if amount0.is_zero() || amount1.is_zero() {
        return Err(BotError::InsufficientLiquidity {
            pool: format!("{} {}", pool.dex, pool.kind),
            details: format!("reserves {} / {}", reserves.reserve0, reserves.reserve1),
        });
    }

    let overflow = || BotError::DataParsing {
        context: format!("reserve ratio of {} {} overflows", pool.dex, pool.kind),
        source: anyhow::anyhow!("decimal division overflow"),
    };
    let ratio = amount0.checked_div(amount1).ok_or_else(overflow)?;
    let inverse = amount1.checked_div(amount0).ok_or_else(overflow)?;
    Ok((ratio, inverse))
}

pub fn compare_reserve_ratios(
    first: (&PoolRef, &PoolReserves),
    second: (&PoolRef, &PoolReserves),
    decimals: PairDecimals,
) -> BotResult<ReserveRatioComparison> {
    let (first_ratio, first_inverse) = reserve_ratios(first.0, first.1, decimals)?;
    let (second_ratio, second_inverse) = reserve_ratios(second.0, second.1, decimals)?;

    Ok(ReserveRatioComparison {
        pair: first.0.kind.label().to_string(),
        first_dex: first.0.dex.name().to_string(),
        second_dex: second.0.dex.name().to_string(),
        first_ratio,
        second_ratio,
        ratio_diff: (first_ratio - second_ratio).abs(),
        first_inverse,
        second_inverse,
        inverse_diff: (first_inverse - second_inverse).abs(),
    })
}
