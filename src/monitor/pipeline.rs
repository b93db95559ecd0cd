//! Sequential monitoring pipeline
//!
//! Stages run in order and each one is awaited before the next starts.
//! A stage prints only after all of its reads succeeded, and the first
//! error aborts every stage after it.

use serde::Serialize;
use tracing::{debug, info, warn};
use crate::{
    arbitrage::{build_price_report, build_spread_reports, compare_reserve_ratios, PairDecimals},
    config::{AddressBook, Config, KUSDT_DECIMALS, WKLAY_DECIMALS},
    errors::BotResult,
    pools::{get_price_info, get_reserves_for, get_token_decimals, resolve_pool, scan_spreads},
    types::{Dex, PalaPriceReport, PoolKind, ReserveRatioComparison, SpreadReport},
    utils::{print_price_report, print_ratio_comparison, print_spread_reports},
    ConcreteProvider,
};

/// Everything a single pass produced. Disabled stages stay `None`.
#[derive(Debug, Clone)]
pub struct MonitorRun {
    pub price_report: PalaPriceReport,
    pub spread_reports: Option<Vec<SpreadReport>>,
    pub ratio_comparison: Option<ReserveRatioComparison>,
}

fn trace_json<T: Serialize>(label: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => debug!("{}: {}", label, json),
        Err(e) => debug!("{}: not serializable ({})", label, e),
    }
}

pub async fn report_pala_prices(
    provider: &ConcreteProvider,
    book: &AddressBook,
    config: &Config,
) -> BotResult<PalaPriceReport> {
    let info = get_price_info(provider, book.pala_viewer()?).await?;
    let report = build_price_report(&info, config.exchange_rate)?;
    trace_json("price report", &report);
    print_price_report(&report);
    Ok(report)
}

pub async fn report_spread_scan(
    provider: &ConcreteProvider,
    book: &AddressBook,
    config: &Config,
) -> BotResult<Vec<SpreadReport>> {
    let viewer = book.pala_viewer()?;
    let kusdt = book.kusdt()?;

    let samples = scan_spreads(provider, viewer, &config.spread_probe_amounts).await?;
    let reports = build_spread_reports(&samples, kusdt)?;
    trace_json("spread reports", &reports);
    print_spread_reports(&reports);
    Ok(reports)
}

/// Compares KLAY-KUSDT reserves between PalaDEX and Klayswap. Token
/// decimals are read on-chain.
pub async fn report_reserve_comparison(
    provider: &ConcreteProvider,
    book: &AddressBook,
) -> BotResult<ReserveRatioComparison> {
    let wklay_decimals = get_token_decimals(provider, book.token("wklay")?).await?;
    let kusdt_decimals = get_token_decimals(provider, book.kusdt()?).await?;
    if u32::from(wklay_decimals) != WKLAY_DECIMALS || u32::from(kusdt_decimals) != KUSDT_DECIMALS {
        warn!(
            "⚠️ Unexpected token decimals: WKLAY={} KUSDT={}",
            wklay_decimals, kusdt_decimals
        );
    }

    let pala = resolve_pool(book, Dex::PalaDex, PoolKind::KlayKusdt)?;
    let klayswap = resolve_pool(book, Dex::Klayswap, PoolKind::KlayKusdt)?;
    let pala_reserves = get_reserves_for(provider, &pala).await?;
    let klayswap_reserves = get_reserves_for(provider, &klayswap).await?;

    let comparison = compare_reserve_ratios(
        (&pala, &pala_reserves),
        (&klayswap, &klayswap_reserves),
        PairDecimals {
            token0: u32::from(wklay_decimals),
            token1: u32::from(kusdt_decimals),
        },
    )?;
    trace_json("reserve comparison", &comparison);
    print_ratio_comparison(&comparison);
    Ok(comparison)
}

pub async fn run_once(
    provider: &ConcreteProvider,
    book: &AddressBook,
    config: &Config,
) -> BotResult<MonitorRun> {
    let price_report = report_pala_prices(provider, book, config).await?;

    let spread_reports = if config.enable_spread_scan {
        Some(report_spread_scan(provider, book, config).await?)
    } else {
        None
    };

    let ratio_comparison = if config.enable_reserve_comparison {
        Some(report_reserve_comparison(provider, book).await?)
    } else {
        None
    };

    info!("✅ Monitoring pass complete");
    Ok(MonitorRun {
        price_report,
        spread_reports,
        ratio_comparison,
    })
}
