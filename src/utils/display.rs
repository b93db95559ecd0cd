//! Display and printing utilities

use tracing::info;
use crate::types::{PalaPriceReport, ReserveRatioComparison, SpreadReport};

pub fn price_report_lines(report: &PalaPriceReport) -> Vec<String> {
    vec![
        format!("📊 PALA Price Info ({})", report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
        "💰 Prices (KRW):".to_string(),
        format!("   PALA in KUSDT pool: {:.3}", report.pala_price_in_kusdt),
        format!("   PALA in KLAY pool:  {:.3}", report.pala_price_in_klay),
        "🏦 PALA-KUSDT Reserves:".to_string(),
        format!("   PALA:  {:.3}", report.pala_reserve_in_kusdt),
        format!("   KUSDT: {:.3}", report.kusdt_reserve_in_kusdt),
        "🏦 PALA-KLAY Reserves:".to_string(),
        format!("   PALA: {:.3}", report.pala_reserve_in_klay),
        format!("   KLAY: {:.3}", report.klay_reserve_in_klay),
        format!("✅ Cheaper pool: {}", report.cheaper_pool),
    ]
}

pub fn spread_report_lines(reports: &[SpreadReport]) -> Vec<String> {
    let mut lines = vec!["🔍 Spread Scan:".to_string()];
    if reports.is_empty() {
        lines.push("   (no probes)".to_string());
    }
    for report in reports {
        lines.push(format!(
            "   input: {:.3} {} | output: {:.3} | profit: {:.3}",
            report.input, report.input_token, report.output, report.profit
        ));
    }
    lines
}

pub fn ratio_comparison_lines(cmp: &ReserveRatioComparison) -> Vec<String> {
    vec![
        format!("⚖️  {} reserve ratios ({} vs {}):", cmp.pair, cmp.first_dex, cmp.second_dex),
        format!("   reserve0/reserve1: {:.6} vs {:.6} (diff {:.6})", cmp.first_ratio, cmp.second_ratio, cmp.ratio_diff),
        format!("   reserve1/reserve0: {:.6} vs {:.6} (diff {:.6})", cmp.first_inverse, cmp.second_inverse, cmp.inverse_diff),
    ]
}

fn emit(lines: Vec<String>) {
    info!("");
    for line in lines {
        info!("{}", line);
    }
}

pub fn print_price_report(report: &PalaPriceReport) {
    emit(price_report_lines(report));
}

pub fn print_spread_reports(reports: &[SpreadReport]) {
    emit(spread_report_lines(reports));
}

pub fn print_ratio_comparison(cmp: &ReserveRatioComparison) {
    emit(ratio_comparison_lines(cmp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use crate::types::{InputToken, PoolKind};

    fn report() -> PalaPriceReport {
        PalaPriceReport {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            pala_price_in_kusdt: dec!(1200.000),
            pala_price_in_klay: dec!(1200.000),
            pala_reserve_in_kusdt: dec!(2500000.500),
            kusdt_reserve_in_kusdt: dec!(312500.063),
            pala_reserve_in_klay: dec!(1000.000),
            klay_reserve_in_klay: dec!(0.000),
            cheaper_pool: PoolKind::PalaKlay,
        }
    }

    #[test]
    fn price_block_shows_three_fractional_digits() {
        let lines = price_report_lines(&report());
        assert_eq!(lines[0], "📊 PALA Price Info (2024-03-01 12:00:00 UTC)");
        assert_eq!(lines[2], "   PALA in KUSDT pool: 1200.000");
        assert_eq!(lines[6], "   KUSDT: 312500.063");
        assert_eq!(lines[9], "   KLAY: 0.000");
        assert_eq!(lines.last().unwrap(), "✅ Cheaper pool: PALA-KLAY");
    }

    #[test]
    fn spread_lines_carry_input_output_profit() {
        let lines = spread_report_lines(&[SpreadReport {
            input_token: InputToken::Wklay,
            input: dec!(100.000),
            output: dec!(101.500),
            profit: dec!(1.500),
        }]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "   input: 100.000 WKLAY | output: 101.500 | profit: 1.500");
    }

    #[test]
    fn ratio_lines_use_six_digits() {
        let lines = ratio_comparison_lines(&ReserveRatioComparison {
            pair: "KLAY-KUSDT".to_string(),
            first_dex: "PalaDEX".to_string(),
            second_dex: "Klayswap".to_string(),
            first_ratio: dec!(4),
            second_ratio: dec!(5),
            ratio_diff: dec!(1),
            first_inverse: dec!(0.25),
            second_inverse: dec!(0.2),
            inverse_diff: dec!(0.05),
        });
        assert_eq!(lines[1], "   reserve0/reserve1: 4.000000 vs 5.000000 (diff 1.000000)");
        assert_eq!(lines[2], "   reserve1/reserve0: 0.250000 vs 0.200000 (diff 0.050000)");
    }
}
