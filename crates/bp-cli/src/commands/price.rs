//! Price command implementation
//!
//! Prices the configured bond at each yield and prints one report line per
//! yield.

use std::io::Write;

use bondprice::pricingengines::{format_price_line, DiscountingBondEngine};
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Run the price command
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let convention = config.convention()?;
    let spec = config.terms().with_maturity(config.bond.maturity_years);
    let engine = DiscountingBondEngine::new(convention);
    info!(
        face_amount = spec.face_amount,
        coupon_rate = spec.coupon_rate,
        periods_per_year = spec.periods_per_year,
        maturity_years = spec.maturity_years,
        %convention,
        "pricing bond"
    );

    for &y in &config.sweep.yields {
        let result = engine.price(&spec, y)?;
        writeln!(out, "{}", format_price_line(y, &result))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn default_run_prints_the_reference_table() {
        let mut buf = Vec::new();
        run(&AppConfig::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            "Market Discount Rate = 7%  =>  Bond Price = 110.39% of Face Amount"
        );
        assert_eq!(
            lines[3],
            "Market Discount Rate = 10%  =>  Bond Price = 100.00% of Face Amount"
        );
    }

    #[test]
    fn pricing_errors_surface() {
        let mut config = AppConfig::default();
        config.bond.face_amount = 0.0;
        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
    }
}
