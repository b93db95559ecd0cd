//! Monitor configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

// Gateway and address book defaults
pub const DEFAULT_RPC_URL: &str = "https://gateway.pala.world";
pub const DEFAULT_ADDR_BOOK_PATH: &str = "./addrBook.yaml";

// Token decimals
pub const WKLAY_DECIMALS: u32 = 18;
pub const KUSDT_DECIMALS: u32 = 6;

/// PalaViewer reports every price and reserve scaled by 10^18.
pub const VIEWER_DECIMALS: u32 = 18;

// Output formatting
pub const DISPLAY_PRECISION: u32 = 3;

/// KRW per USDT used to quote PALA prices.
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(1200);

pub const DEFAULT_SPREAD_PROBE_AMOUNTS: &[u64] = &[1, 10, 100, 1000];

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub addr_book_path: PathBuf,
    pub exchange_rate: Decimal,
    pub spread_probe_amounts: Vec<u64>,
    pub enable_spread_scan: bool,
    pub enable_reserve_comparison: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            addr_book_path: PathBuf::from(DEFAULT_ADDR_BOOK_PATH),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            spread_probe_amounts: DEFAULT_SPREAD_PROBE_AMOUNTS.to_vec(),
            enable_spread_scan: true,
            enable_reserve_comparison: true,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self {
            rpc_url: env::var("RPC_URL")
                .unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            addr_book_path: env::var("ADDR_BOOK_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_ADDR_BOOK_PATH)),
            exchange_rate: env::var("EXCHANGE_RATE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .filter(|rate| *rate > dec!(0))
                .unwrap_or(DEFAULT_EXCHANGE_RATE),
            spread_probe_amounts: env::var("SPREAD_PROBE_AMOUNTS")
                .ok()
                .and_then(|s| parse_probe_amounts(&s))
                .unwrap_or_else(|| DEFAULT_SPREAD_PROBE_AMOUNTS.to_vec()),
            enable_spread_scan: env::var("ENABLE_SPREAD_SCAN")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            enable_reserve_comparison: env::var("ENABLE_RESERVE_COMPARISON")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}

/// Parses a comma separated list of whole-unit probe amounts.
/// Returns `None` when any entry is malformed or the list is empty.
pub fn parse_probe_amounts(raw: &str) -> Option<Vec<u64>> {
    let amounts = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().ok().filter(|amount| *amount > 0))
        .collect::<Option<Vec<_>>>()?;

    if amounts.is_empty() { None } else { Some(amounts) }
}
