//! Fixed-point conversion of raw on-chain integers
//!
//! Raw values are integers scaled by `10^decimals`. Display values are
//! rounded to [`DISPLAY_PRECISION`] fractional digits, half away from zero.
//! Rounding happens in integer space on the full U256 so the result is exact.

use alloy::primitives::U256;
use rust_decimal::prelude::*;
use crate::{
    config::DISPLAY_PRECISION,
    errors::{BotError, BotResult},
};

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

pub fn pow10(n: u32) -> U256 {
    U256::from(10u64).pow(U256::from(n))
}

/// Parses a raw base-10 integer string as returned by a contract call.
pub fn parse_raw(raw: &str) -> BotResult<U256> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BotError::DataParsing {
            context: format!("'{}' is not a base-10 integer", raw),
            source: anyhow::anyhow!("expected only decimal digits"),
        });
    }
    U256::from_str_radix(digits, 10).map_err(|e| BotError::DataParsing {
        context: format!("'{}' is not a base-10 integer", raw),
        source: anyhow::anyhow!("{}", e),
    })
}

/// `round(value / 10^decimals * rate, DISPLAY_PRECISION)`.
pub fn scale_to_display(value: U256, decimals: u32, rate: Decimal) -> BotResult<Decimal> {
    if rate.is_sign_negative() {
        return Err(BotError::DataParsing {
            context: format!("negative rate {}", rate),
            source: anyhow::anyhow!("rate must be non-negative"),
        });
    }
    let overflow = || BotError::DataParsing {
        context: format!("{} scaled by 10^-{} x {} overflows", value, decimals, rate),
        source: anyhow::anyhow!("arithmetic overflow"),
    };

    let mantissa = U256::from(rate.mantissa().unsigned_abs());
    let denominator = pow10(decimals + rate.scale());
    let numerator = value
        .checked_mul(mantissa)
        .and_then(|v| v.checked_mul(pow10(DISPLAY_PRECISION)))
        .ok_or_else(overflow)?;

    let units = numerator
        .checked_add(denominator / U256::from(2u64))
        .ok_or_else(overflow)?
        / denominator;

    let units = i128::try_from(units).map_err(|_| overflow())?;
    Decimal::try_from_i128_with_scale(units, DISPLAY_PRECISION).map_err(|_| overflow())
}

/// Reserve or amount normalization: `round(value / 10^decimals, 3)`.
pub fn normalize(value: U256, decimals: u32) -> BotResult<Decimal> {
    scale_to_display(value, decimals, Decimal::ONE)
}

/// Price normalization: `round(value / 10^decimals * rate, 3)`.
pub fn normalize_price(value: U256, decimals: u32, rate: Decimal) -> BotResult<Decimal> {
    scale_to_display(value, decimals, rate)
}

pub fn normalize_raw(raw: &str, decimals: u32) -> BotResult<Decimal> {
    normalize(parse_raw(raw)?, decimals)
}

pub fn normalize_raw_price(raw: &str, decimals: u32, rate: Decimal) -> BotResult<Decimal> {
    normalize_price(parse_raw(raw)?, decimals, rate)
}

/// Converts a raw amount to a `Decimal` without rounding to display
/// precision. Low digits are dropped only when the value exceeds what a
/// `Decimal` mantissa can hold.
pub fn to_decimal(value: U256, decimals: u32) -> BotResult<Decimal> {
    let max_mantissa = U256::from(Decimal::MAX.mantissa().unsigned_abs());
    let mut value = value;
    let mut scale = decimals;

    while value > max_mantissa || scale > MAX_DECIMAL_SCALE {
        if scale == 0 {
            return Err(BotError::DataParsing {
                context: format!("{} does not fit in a decimal", value),
                source: anyhow::anyhow!("value too large"),
            });
        }
        value /= U256::from(10u64);
        scale -= 1;
    }

    let mantissa = u128::try_from(value).map_err(|e| BotError::DataParsing {
        context: format!("{} does not fit in u128", value),
        source: anyhow::anyhow!("{}", e),
    })?;
    Ok(Decimal::from_i128_with_scale(mantissa as i128, scale))
}
