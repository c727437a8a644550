//! # bp-instruments
//!
//! Bond instrument definitions for bondprice.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bond;

pub use bond::{BondSpec, BondTerms};
