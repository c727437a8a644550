//! Console report lines.

use bp_core::{Rate, Real};

use crate::discounting_bond_engine::ValuationResult;

/// Format a rate as a percentage with at most four decimals and no
/// trailing zeros (`0.07` -> `"7"`, `0.0725` -> `"7.25"`).
pub fn format_percent(rate: Rate) -> String {
    let s = format!("{:.4}", rate * 100.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// One report line for a valuation at `market_yield`:
///
/// `Market Discount Rate = 7%  =>  Bond Price = 110.39% of Face Amount`
pub fn format_price_line(market_yield: Rate, result: &ValuationResult) -> String {
    format!(
        "Market Discount Rate = {}%  =>  Bond Price = {:.2}% of Face Amount",
        format_percent(market_yield),
        result.price_percent()
    )
}

/// Price as a percentage of face with two decimals, e.g. `"96.80"`.
pub fn format_price_percent(price_fraction: Real) -> String {
    format!("{:.2}", price_fraction * 100.0)
}
