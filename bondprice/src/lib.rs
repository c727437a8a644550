//! # bondprice
//!
//! Theoretical pricing of fixed-rate bullet bonds at a flat market yield,
//! and yield/maturity sensitivity sweeps.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bondprice = "0.1"
//! ```
//!
//! ```rust
//! use bondprice::core::Convention;
//! use bondprice::instruments::BondSpec;
//! use bondprice::pricingengines::price_bond;
//!
//! let spec = BondSpec::new(200.0, 0.10, 4, 4.0);
//! let premium = price_bond(&spec, Convention::CompoundPeriodic, 0.07).unwrap();
//! assert!(premium.price_fraction > 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, conventions, and error definitions.
pub use bp_core as core;

/// Cash flows and schedule generation.
pub use bp_cashflows as cashflows;

/// Bond instruments.
pub use bp_instruments as instruments;

/// Valuation engine and sensitivity sweeps.
pub use bp_pricingengines as pricingengines;

pub use bp_core::{Convention, Error, Frequency, Result};
pub use bp_instruments::{BondSpec, BondTerms};
pub use bp_pricingengines::{
    price_bond, sweep, sweep_with, SweepConfig, SweepPolicy, SweepResult, ValuationResult,
};
