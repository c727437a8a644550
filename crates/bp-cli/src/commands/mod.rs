//! Subcommand implementations.

pub mod price;
pub mod sweep;
