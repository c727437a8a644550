//! Fixed-rate bullet bond terms.
//!
//! [`BondTerms`] describes a bond up to its maturity; [`BondSpec`] adds the
//! maturity and is what gets priced. Both are plain values: a sweep builds
//! a fresh `BondSpec` per maturity from one shared `BondTerms`.

use bp_cashflows::{generate_schedule, total_periods, Leg};
use bp_core::{ensure, errors::Result, Frequency, Rate, Real, Time};

/// A fixed-rate bullet bond without a maturity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondTerms {
    /// Face (notional) amount, repaid in full at maturity.
    pub face_amount: Real,
    /// Annual coupon rate as a decimal.
    pub coupon_rate: Rate,
    /// Coupon payments per year.
    pub periods_per_year: u32,
}

impl BondTerms {
    /// Create bond terms.
    pub fn new(face_amount: Real, coupon_rate: Rate, periods_per_year: u32) -> Self {
        Self {
            face_amount,
            coupon_rate,
            periods_per_year,
        }
    }

    /// Create bond terms paying at a named frequency.
    pub fn with_frequency(face_amount: Real, coupon_rate: Rate, frequency: Frequency) -> Self {
        Self::new(face_amount, coupon_rate, frequency.periods_per_year())
    }

    /// The bond maturing `maturity_years` from now.
    pub fn with_maturity(&self, maturity_years: Time) -> BondSpec {
        BondSpec {
            face_amount: self.face_amount,
            coupon_rate: self.coupon_rate,
            periods_per_year: self.periods_per_year,
            maturity_years,
        }
    }

    /// Check the terms can be priced.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.face_amount.is_finite() && self.face_amount > 0.0,
            "face amount must be positive, got {}",
            self.face_amount
        );
        ensure!(
            self.coupon_rate.is_finite(),
            "coupon rate must be finite, got {}",
            self.coupon_rate
        );
        ensure!(
            self.periods_per_year > 0,
            "periods per year must be positive"
        );
        Ok(())
    }
}

/// A fixed-rate bullet bond.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondSpec {
    /// Face (notional) amount, repaid in full at maturity.
    pub face_amount: Real,
    /// Annual coupon rate as a decimal.
    pub coupon_rate: Rate,
    /// Coupon payments per year.
    pub periods_per_year: u32,
    /// Time to maturity in years.
    pub maturity_years: Time,
}

impl BondSpec {
    /// Create a bond specification.
    pub fn new(
        face_amount: Real,
        coupon_rate: Rate,
        periods_per_year: u32,
        maturity_years: Time,
    ) -> Self {
        Self {
            face_amount,
            coupon_rate,
            periods_per_year,
            maturity_years,
        }
    }

    /// The terms of this bond, without its maturity.
    pub fn terms(&self) -> BondTerms {
        BondTerms::new(self.face_amount, self.coupon_rate, self.periods_per_year)
    }

    /// Check the bond can be priced.
    ///
    /// Fails with `InvalidArgument` for a non-positive face amount, a zero
    /// frequency, a negative maturity, or more than
    /// [`MAX_PERIODS`](bp_cashflows::MAX_PERIODS) coupon periods.
    pub fn validate(&self) -> Result<()> {
        self.terms().validate()?;
        self.total_periods()?;
        Ok(())
    }

    /// Number of coupon periods (truncated toward zero).
    pub fn total_periods(&self) -> Result<u32> {
        total_periods(self.periods_per_year, self.maturity_years)
    }

    /// The bond's cash flows, ordered by period.
    pub fn cashflows(&self) -> Result<Leg> {
        generate_schedule(
            self.face_amount,
            self.coupon_rate,
            self.periods_per_year,
            self.maturity_years,
        )
    }
}
