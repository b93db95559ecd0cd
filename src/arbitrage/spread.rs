//! Spread scan normalization

use alloy::primitives::Address;
use rust_decimal::Decimal;
use crate::{
    config::{DISPLAY_PRECISION, KUSDT_DECIMALS, WKLAY_DECIMALS},
    errors::BotResult,
    types::{InputToken, SpreadReport, SpreadSample},
    utils::normalize,
};

/// A scan that ends in KUSDT started from WKLAY; anything else started
/// from KUSDT. Returns the input token and the decimals its spread uses.
pub fn classify_input(output_token: Address, kusdt: Address) -> (InputToken, u32) {
    if output_token == kusdt {
        (InputToken::Wklay, WKLAY_DECIMALS)
    } else {
        (InputToken::Kusdt, KUSDT_DECIMALS)
    }
}

pub fn build_spread_report(sample: &SpreadSample, kusdt: Address) -> BotResult<SpreadReport> {
    let (input_token, decimals) = classify_input(sample.output_token, kusdt);

    let mut input = Decimal::from(sample.amount_in);
    input.rescale(DISPLAY_PRECISION);
    let profit = normalize(sample.spread, decimals)?;

    Ok(SpreadReport {
        input_token,
        input,
        output: input + profit,
        profit,
    })
}

pub fn build_spread_reports(samples: &[SpreadSample], kusdt: Address) -> BotResult<Vec<SpreadReport>> {
    samples
        .iter()
        .map(|sample| build_spread_report(sample, kusdt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};
    use rust_decimal_macros::dec;

    const KUSDT: Address = address!("cee8faf64bb97a73bb51e115aa89c17ffa8dd167");
    const WKLAY: Address = address!("2ff5f6dE2287CA3075232127277E53519A77947C");

    #[test]
    fn kusdt_output_means_wklay_input() {
        assert_eq!(classify_input(KUSDT, KUSDT), (InputToken::Wklay, 18));
        assert_eq!(classify_input(WKLAY, KUSDT), (InputToken::Kusdt, 6));
    }

    #[test]
    fn wklay_spread_uses_eighteen_decimals() {
        let sample = SpreadSample {
            amount_in: 100,
            output_token: KUSDT,
            spread: U256::from(1_500_000_000_000_000_000u128),
        };
        let report = build_spread_report(&sample, KUSDT).unwrap();
        assert_eq!(report.input_token, InputToken::Wklay);
        assert_eq!(report.input.to_string(), "100.000");
        assert_eq!(report.profit, dec!(1.5));
        assert_eq!(report.output.to_string(), "101.500");
    }

    #[test]
    fn kusdt_spread_uses_six_decimals() {
        let sample = SpreadSample {
            amount_in: 10,
            output_token: WKLAY,
            spread: U256::from(2_345_678u64),
        };
        let report = build_spread_report(&sample, KUSDT).unwrap();
        assert_eq!(report.input_token, InputToken::Kusdt);
        assert_eq!(report.profit.to_string(), "2.346");
        assert_eq!(report.output.to_string(), "12.346");
    }
}
