//! Spread scan samples

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// One raw `scanSpread` probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadSample {
    /// Probed input amount in whole token units
    pub amount_in: u64,
    pub output_token: Address,
    pub spread: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputToken {
    Wklay,
    Kusdt,
}

impl InputToken {
    pub fn symbol(&self) -> &'static str {
        match self {
            InputToken::Wklay => "WKLAY",
            InputToken::Kusdt => "KUSDT",
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpreadReport {
    pub input_token: InputToken,
    pub input: Decimal,
    pub output: Decimal,
    pub profit: Decimal,
}
