//! # bp-core
//!
//! Core types, discounting conventions, and error definitions for bondprice.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: primitive type aliases, the error enum with its
//! `ensure!` / `ensure_domain!` macros, coupon [`Frequency`], and the
//! [`Convention`] policy that turns a yield into per-period discount
//! factors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Discounting conventions and the discount-factor policy.
pub mod convention;

/// Error types and the `ensure!` / `ensure_domain!` macros.
pub mod errors;

/// Coupon frequencies.
pub mod frequency;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor.
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use convention::{discount_factor, Convention};
pub use errors::{Error, Result};
pub use frequency::Frequency;
