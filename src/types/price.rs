//! Price info as read from the PalaViewer contract

use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use super::PoolKind;

/// Raw `getPriceInfo` result. Every field is scaled by 10^18.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceInfo {
    pub pala_price_in_kusdt: U256,
    pub pala_price_in_klay: U256,
    pub pala_reserve_in_kusdt: U256,
    pub kusdt_reserve_in_kusdt: U256,
    pub pala_reserve_in_klay: U256,
    pub klay_reserve_in_klay: U256,
}

#[derive(Debug, Clone, Serialize)]
pub struct PalaPriceReport {
    pub timestamp: DateTime<Utc>,
    pub pala_price_in_kusdt: Decimal,
    pub pala_price_in_klay: Decimal,
    pub pala_reserve_in_kusdt: Decimal,
    pub kusdt_reserve_in_kusdt: Decimal,
    pub pala_reserve_in_klay: Decimal,
    pub klay_reserve_in_klay: Decimal,
    #[serde(serialize_with = "serialize_pool_label")]
    pub cheaper_pool: PoolKind,
}

fn serialize_pool_label<S: serde::Serializer>(pool: &PoolKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(pool.label())
}
