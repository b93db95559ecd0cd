//! PALA price report and cheaper-pool selection

use chrono::Utc;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use crate::{
    config::VIEWER_DECIMALS,
    errors::BotResult,
    types::{PalaPriceReport, PoolKind, PriceInfo},
    utils::{normalize, normalize_price},
};

/// Picks the pool quoting PALA lower.
///
/// PALA-KUSDT wins only on a strictly lower price. Equal quotes go to
/// PALA-KLAY.
pub fn cheaper_pool(price_in_kusdt: Decimal, price_in_klay: Decimal) -> PoolKind {
    match price_in_kusdt.cmp(&price_in_klay) {
        Ordering::Less => PoolKind::PalaKusdt,
        Ordering::Equal | Ordering::Greater => PoolKind::PalaKlay,
    }
}

/// Normalizes a raw `getPriceInfo` result. Prices are quoted through
/// `exchange_rate`, reserves are plain token amounts.
pub fn build_price_report(info: &PriceInfo, exchange_rate: Decimal) -> BotResult<PalaPriceReport> {
    let pala_price_in_kusdt = normalize_price(info.pala_price_in_kusdt, VIEWER_DECIMALS, exchange_rate)?;
    let pala_price_in_klay = normalize_price(info.pala_price_in_klay, VIEWER_DECIMALS, exchange_rate)?;

    Ok(PalaPriceReport {
        timestamp: Utc::now(),
        pala_price_in_kusdt,
        pala_price_in_klay,
        pala_reserve_in_kusdt: normalize(info.pala_reserve_in_kusdt, VIEWER_DECIMALS)?,
        kusdt_reserve_in_kusdt: normalize(info.kusdt_reserve_in_kusdt, VIEWER_DECIMALS)?,
        pala_reserve_in_klay: normalize(info.pala_reserve_in_klay, VIEWER_DECIMALS)?,
        klay_reserve_in_klay: normalize(info.klay_reserve_in_klay, VIEWER_DECIMALS)?,
        cheaper_pool: cheaper_pool(pala_price_in_kusdt, pala_price_in_klay),
    })
}
