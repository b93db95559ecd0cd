//! Pool-related types and structures

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::Serialize;
use super::{Dex, PoolKind};

/// Raw reserves of a pair pool, exactly as returned on-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    pub reserve0: U256,
    pub reserve1: U256,
}

/// A pool resolved from the address book.
#[derive(Debug, Clone, Copy)]
pub struct PoolRef {
    pub dex: Dex,
    pub kind: PoolKind,
    pub address: Address,
}

/// Reserve ratios of one pair compared across two DEXes.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveRatioComparison {
    pub pair: String,
    pub first_dex: String,
    pub second_dex: String,
    /// reserve0 / reserve1 in whole-token units
    pub first_ratio: Decimal,
    pub second_ratio: Decimal,
    pub ratio_diff: Decimal,
    /// reserve1 / reserve0, the inverse quote
    pub first_inverse: Decimal,
    pub second_inverse: Decimal,
    pub inverse_diff: Decimal,
}
