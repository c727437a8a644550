//! Yield/maturity sensitivity sweeps.
//!
//! [`sweep`] prices one bond per (maturity, yield) grid point and returns
//! one [`PriceSeries`] per maturity, in the order the maturities were
//! given, each holding `(yield, price)` points in the order the yields were
//! given. Prices are in currency units (`price_fraction · face_amount`).
//!
//! Grid points are independent. With the `parallel` feature they are priced
//! on the rayon pool once the grid reaches
//! [`SweepConfig::parallel_threshold`] points; the output order never depends on
//! scheduling.

use bp_cashflows::total_periods;
use bp_core::{errors::Result, Convention, Error, Price, Rate, Time};
use bp_instruments::BondTerms;
use tracing::{debug, warn};

use crate::discounting_bond_engine::{DiscountingBondEngine, ValuationResult};

/// What a sweep does when a grid point cannot be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SweepPolicy {
    /// Abort on the first failure in (maturity, yield) order.
    #[default]
    FailFast,
    /// Drop the failing point from its series and carry on.
    SkipUnpriceable,
}

/// Sweep settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Failure handling.
    pub policy: SweepPolicy,
    /// Allow pricing grid points in parallel.
    pub parallel: bool,
    /// Minimum grid size before parallel pricing kicks in.
    pub parallel_threshold: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            policy: SweepPolicy::FailFast,
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

impl SweepConfig {
    /// Same settings with a different failure policy.
    pub fn with_policy(mut self, policy: SweepPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Same settings, always pricing on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Same settings with a different parallel threshold.
    ///
    /// Leaves [`parallel`](Self::parallel) as it is, so a sequential config
    /// stays sequential.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a grid of `points` would be priced in parallel.
    pub fn should_parallelize(&self, points: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && points >= self.parallel_threshold
    }
}

/// Prices of one maturity across the swept yields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSeries {
    /// Maturity of every bond in the series, in years.
    pub maturity_years: Time,
    /// `(yield, price)` points.
    pub points: Vec<(Rate, Price)>,
}

impl PriceSeries {
    /// The yields of the series (x values).
    pub fn yields(&self) -> impl Iterator<Item = Rate> + '_ {
        self.points.iter().map(|&(y, _)| y)
    }

    /// The prices of the series (y values).
    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.points.iter().map(|&(_, p)| p)
    }

    /// Price at exactly `yield_rate`, if that point was priced.
    pub fn price_at(&self, yield_rate: Rate) -> Option<Price> {
        self.points
            .iter()
            .find(|&&(y, _)| y == yield_rate)
            .map(|&(_, p)| p)
    }
}

/// Output of a sweep: one series per maturity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    series: Vec<PriceSeries>,
}

impl SweepResult {
    /// All series, in maturity input order.
    pub fn series(&self) -> &[PriceSeries] {
        &self.series
    }

    /// The series for `maturity_years`, if it was swept.
    pub fn get(&self, maturity_years: Time) -> Option<&PriceSeries> {
        self.series
            .iter()
            .find(|s| s.maturity_years == maturity_years)
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no maturity was swept.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterate over the series.
    pub fn iter(&self) -> std::slice::Iter<'_, PriceSeries> {
        self.series.iter()
    }

    /// Take ownership of the series.
    pub fn into_series(self) -> Vec<PriceSeries> {
        self.series
    }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a PriceSeries;
    type IntoIter = std::slice::Iter<'a, PriceSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// Sweep with the default settings (fail fast).
///
/// # Example
/// ```
/// use bp_core::Convention;
/// use bp_instruments::BondTerms;
/// use bp_pricingengines::sweep;
///
/// let terms = BondTerms::new(200.0, 0.10, 4);
/// let result = sweep(&terms, Convention::CompoundPeriodic, &[0.07, 0.10, 0.13], &[2.0, 4.0]).unwrap();
/// assert_eq!(result.len(), 2);
/// let four_years = result.get(4.0).unwrap();
/// assert!((four_years.price_at(0.10).unwrap() - 200.0).abs() < 1e-9);
/// ```
pub fn sweep(
    terms: &BondTerms,
    convention: Convention,
    yields: &[Rate],
    maturities: &[Time],
) -> Result<SweepResult> {
    sweep_with(&SweepConfig::default(), terms, convention, yields, maturities)
}

/// Sweep with explicit settings.
///
/// The bond terms and every maturity are checked before any pricing, and
/// fail the sweep whatever the policy. Per-point failures (a yield outside
/// a convention's domain, a non-finite yield) follow `config.policy`.
pub fn sweep_with(
    config: &SweepConfig,
    terms: &BondTerms,
    convention: Convention,
    yields: &[Rate],
    maturities: &[Time],
) -> Result<SweepResult> {
    terms.validate()?;
    for &m in maturities {
        total_periods(terms.periods_per_year, m)?;
    }

    let engine = DiscountingBondEngine::new(convention);
    let points = yields.len() * maturities.len();
    let parallel = config.should_parallelize(points);
    debug!(
        %convention,
        yields = yields.len(),
        maturities = maturities.len(),
        parallel,
        "starting sweep"
    );

    let price = |&(maturity, market_yield): &(Time, Rate)| {
        engine.price(&terms.with_maturity(maturity), market_yield)
    };
    let grid = maturities
        .iter()
        .flat_map(|&m| yields.iter().map(move |&y| (m, y)));

    if parallel {
        let grid: Vec<(Time, Rate)> = grid.collect();
        let outcomes = price_all(&grid, price);
        assemble(config.policy, terms, yields, maturities, outcomes.into_iter())
    } else {
        assemble(config.policy, terms, yields, maturities, grid.map(|p| price(&p)))
    }
}

#[cfg(feature = "parallel")]
fn price_all<F>(grid: &[(Time, Rate)], price: F) -> Vec<Result<ValuationResult>>
where
    F: Fn(&(Time, Rate)) -> Result<ValuationResult> + Sync + Send,
{
    use rayon::prelude::*;
    grid.par_iter().map(price).collect()
}

#[cfg(not(feature = "parallel"))]
fn price_all<F>(grid: &[(Time, Rate)], price: F) -> Vec<Result<ValuationResult>>
where
    F: Fn(&(Time, Rate)) -> Result<ValuationResult>,
{
    grid.iter().map(price).collect()
}

/// Group grid outcomes, produced in (maturity, yield) order, into series.
fn assemble(
    policy: SweepPolicy,
    terms: &BondTerms,
    yields: &[Rate],
    maturities: &[Time],
    mut outcomes: impl Iterator<Item = Result<ValuationResult>>,
) -> Result<SweepResult> {
    let mut series = Vec::with_capacity(maturities.len());
    for &maturity_years in maturities {
        let mut points = Vec::with_capacity(yields.len());
        for &market_yield in yields {
            let outcome = outcomes.next().ok_or_else(|| {
                Error::InvalidArgument("sweep grid ended early".to_string())
            })?;
            match outcome {
                Ok(r) => points.push((market_yield, r.price_amount(terms.face_amount))),
                Err(e) if policy == SweepPolicy::SkipUnpriceable => {
                    warn!(maturity_years, market_yield, error = %e, "skipping unpriceable point");
                }
                Err(e) => return Err(e),
            }
        }
        series.push(PriceSeries {
            maturity_years,
            points,
        });
    }
    Ok(SweepResult { series })
}
