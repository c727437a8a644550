//! Sweep command implementation
//!
//! Prices the configured bond across the yield/maturity grid and renders
//! one price series per maturity.

use std::io::Write;

use bondprice::sweep_with;
use tracing::info;

use crate::config::AppConfig;
use crate::output::{render, OutputFormat};
use crate::Result;

/// Run the sweep command
pub fn run<W: Write>(config: &AppConfig, format: OutputFormat, out: &mut W) -> Result<()> {
    let convention = config.convention()?;
    let sweep_config = config.sweep_config();
    info!(
        yields = config.sweep.yields.len(),
        maturities = config.sweep.maturities.len(),
        policy = ?sweep_config.policy,
        %convention,
        "running sweep"
    );

    let result = sweep_with(
        &sweep_config,
        &config.terms(),
        convention,
        &config.sweep.yields,
        &config.sweep.maturities,
    )?;
    render(format, &result, &config.sweep.yields, out)?;

    info!(series = result.len(), "sweep complete");
    Ok(())
}
