//! Rendering of sweep results.

use std::io::Write;

use bondprice::pricingengines::format_percent;
use bondprice::SweepResult;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Output format of the `sweep` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per yield, one column per maturity.
    Table,
    /// Long format: `maturity_years,yield,price`.
    Csv,
    /// The sweep result as JSON.
    Json,
}

#[derive(Serialize)]
struct CsvRow {
    maturity_years: f64,
    #[serde(rename = "yield")]
    yield_rate: f64,
    price: f64,
}

/// Write `result` to `out` in the requested format.
///
/// `yields` are the swept yields, used for table rows.
pub fn render<W: Write>(
    format: OutputFormat,
    result: &SweepResult,
    yields: &[f64],
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(result, yields, out),
        OutputFormat::Csv => render_csv(result, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_table<W: Write>(result: &SweepResult, yields: &[f64], out: &mut W) -> Result<()> {
    write!(out, "{:>8}", "YTM")?;
    for series in result {
        write!(out, " {:>10}", format!("{}Y", series.maturity_years))?;
    }
    writeln!(out)?;

    for &y in yields {
        write!(out, "{:>8}", format!("{}%", format_percent(y)))?;
        for series in result {
            match series.price_at(y) {
                Some(price) => write!(out, " {price:>10.2}")?,
                None => write!(out, " {:>10}", "n/a")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_csv<W: Write>(result: &SweepResult, out: &mut W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for series in result {
        for &(yield_rate, price) in &series.points {
            wtr.serialize(CsvRow {
                maturity_years: series.maturity_years,
                yield_rate,
                price,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
