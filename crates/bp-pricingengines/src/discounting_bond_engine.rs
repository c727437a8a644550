//! Discounting bond pricing engine.
//!
//! Prices a bullet bond at a flat market yield by discounting each
//! nominal-period cash flow with the selected [`Convention`]:
//!
//! $$\text{PV} = \sum_{t=1}^{n} (c_t + p_t) \cdot d(y, m, t)$$
//!
//! and normalizing by the face amount. Flows are accumulated in ascending
//! period order so repeated valuations are bit-identical.

use std::fmt;

use bp_cashflows::CashFlow;
use bp_core::{ensure, errors::Result, Convention, Price, Rate, Real};
use bp_instruments::BondSpec;
use tracing::debug;

/// Present value and price of one valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Sum of discounted coupons and principal, in currency units.
    pub present_value: Price,
    /// `present_value / face_amount`.
    pub price_fraction: Real,
}

impl ValuationResult {
    /// Price as a percentage of face amount.
    pub fn price_percent(&self) -> Real {
        self.price_fraction * 100.0
    }

    /// Price in currency units for a bond with the given face amount.
    pub fn price_amount(&self, face_amount: Real) -> Price {
        self.price_fraction * face_amount
    }
}

impl fmt::Display for ValuationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PV {:.6} ({:.4}% of face)",
            self.present_value,
            self.price_percent()
        )
    }
}

/// Discounting bond pricing engine at a flat market yield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountingBondEngine {
    convention: Convention,
}

impl DiscountingBondEngine {
    /// Create a new engine discounting under `convention`.
    pub fn new(convention: Convention) -> Self {
        Self { convention }
    }

    /// The engine's discounting convention.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Price a bond at `market_yield`.
    ///
    /// # Errors
    /// `InvalidArgument` if the bond fails [`BondSpec::validate`], and
    /// `Domain` if a discount factor is undefined at `market_yield`.
    pub fn price(&self, spec: &BondSpec, market_yield: Rate) -> Result<ValuationResult> {
        spec.validate()?;
        let leg = spec.cashflows()?;
        self.price_leg(&leg, spec.face_amount, spec.periods_per_year, market_yield)
    }

    /// Price an explicit leg whose periods are `1 / periods_per_year` long.
    pub fn price_leg(
        &self,
        leg: &[CashFlow],
        face_amount: Real,
        periods_per_year: u32,
        market_yield: Rate,
    ) -> Result<ValuationResult> {
        ensure!(
            face_amount.is_finite() && face_amount != 0.0,
            "face amount must be non-zero, got {face_amount}"
        );
        let mut present_value = 0.0;
        for cf in leg {
            let df = self
                .convention
                .discount_factor(market_yield, periods_per_year, cf.period_index)?;
            present_value += cf.amount() * df;
        }
        let result = ValuationResult {
            present_value,
            price_fraction: present_value / face_amount,
        };
        debug!(
            convention = %self.convention,
            market_yield,
            periods = leg.len(),
            present_value = result.present_value,
            price_fraction = result.price_fraction,
            "priced bond"
        );
        Ok(result)
    }
}

/// Price `spec` at `market_yield` under `convention`.
///
/// Shorthand for `DiscountingBondEngine::new(convention).price(spec, market_yield)`.
///
/// # Example
/// ```
/// use bp_core::Convention;
/// use bp_instruments::BondSpec;
/// use bp_pricingengines::price_bond;
///
/// let spec = BondSpec::new(200.0, 0.10, 4, 4.0);
/// let par = price_bond(&spec, Convention::CompoundPeriodic, 0.10).unwrap();
/// assert!((par.price_fraction - 1.0).abs() < 1e-9);
/// ```
pub fn price_bond(
    spec: &BondSpec,
    convention: Convention,
    market_yield: Rate,
) -> Result<ValuationResult> {
    DiscountingBondEngine::new(convention).price(spec, market_yield)
}
