//! # bp-pricingengines
//!
//! Valuation of fixed-rate bullet bonds at a flat market yield, and
//! yield/maturity sensitivity sweeps built on it.
//!
//! ## Engines
//!
//! - [`DiscountingBondEngine`] / [`price_bond`]: discounted cash flows under
//!   a [`Convention`](bp_core::Convention)
//! - [`sweep`] / [`sweep_with`]: one price series per maturity across a set
//!   of yields

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod discounting_bond_engine;
pub mod report;
pub mod sensitivity;

pub use discounting_bond_engine::{price_bond, DiscountingBondEngine, ValuationResult};
pub use report::{format_percent, format_price_line, format_price_percent};
pub use sensitivity::{sweep, sweep_with, PriceSeries, SweepConfig, SweepPolicy, SweepResult};
