//! # bp-cashflows
//!
//! Cash flows, legs, and bullet-bond schedule generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cashflow;
pub mod schedule;

pub use cashflow::{CashFlow, Leg};
pub use schedule::{
    generate_schedule, last_period, redemption, total_amount, total_periods, MAX_PERIODS,
};
