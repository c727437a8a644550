//! Discounting conventions.
//!
//! A [`Convention`] maps an annual market yield, a coupon frequency and a
//! nominal period index to a discount factor. Both conventions work on
//! nominal periods of length `1 / periods_per_year`; neither looks at
//! calendar days.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::{ensure, ensure_domain, DiscountFactor, Rate, Real};

/// How a per-period discount factor is derived from the market yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Convention {
    /// Periodic compounding: `(1 + y/m)^-t`.
    #[default]
    CompoundPeriodic,
    /// Simple interest to each payment: `1 / (1 + y·t/m)`.
    SimpleAccrual,
}

impl Convention {
    /// All conventions, in declaration order.
    pub const ALL: [Convention; 2] = [Convention::CompoundPeriodic, Convention::SimpleAccrual];

    /// Discount factor for the payment at `period_index` (1-based).
    ///
    /// See [`discount_factor`].
    pub fn discount_factor(
        &self,
        yield_rate: Rate,
        periods_per_year: u32,
        period_index: u32,
    ) -> Result<DiscountFactor> {
        discount_factor(*self, yield_rate, periods_per_year, period_index)
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Convention::CompoundPeriodic => "compound-periodic",
            Convention::SimpleAccrual => "simple-accrual",
        }
    }
}

/// Discount factor for the payment at `period_index` under `convention`.
///
/// * `CompoundPeriodic`: `1 / (1 + y/m)^t`, defined while `1 + y/m > 0`.
/// * `SimpleAccrual`: `1 / (1 + y·(t/m))`, defined while the denominator
///   is non-zero.
///
/// Negative yields are accepted. `periods_per_year` and `period_index`
/// must be at least 1 and `yield_rate` must be finite, otherwise
/// [`Error::InvalidArgument`] is returned. An undefined factor gives
/// [`Error::Domain`].
///
/// # Example
/// ```
/// use bp_core::{discount_factor, Convention};
/// let df = discount_factor(Convention::CompoundPeriodic, 0.10, 4, 2).unwrap();
/// assert!((df - 1.0 / 1.025_f64.powi(2)).abs() < 1e-15);
/// ```
pub fn discount_factor(
    convention: Convention,
    yield_rate: Rate,
    periods_per_year: u32,
    period_index: u32,
) -> Result<DiscountFactor> {
    ensure!(periods_per_year > 0, "periods per year must be positive");
    ensure!(period_index >= 1, "period index must be at least 1, got 0");
    ensure!(
        yield_rate.is_finite(),
        "yield must be finite, got {yield_rate}"
    );

    let m = Real::from(periods_per_year);
    let t = Real::from(period_index);
    match convention {
        Convention::CompoundPeriodic => {
            let base = 1.0 + yield_rate / m;
            ensure_domain!(
                base > 0.0,
                "compounding base 1 + {yield_rate}/{periods_per_year} = {base} is not positive"
            );
            Ok(1.0 / base.powf(t))
        }
        Convention::SimpleAccrual => {
            let denominator = 1.0 + yield_rate * (t / m);
            ensure_domain!(
                denominator != 0.0,
                "simple accrual denominator vanishes at yield {yield_rate}, period {period_index}"
            );
            Ok(1.0 / denominator)
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = Error;

    /// Parses a canonical name or a day-count tag (case-insensitive).
    ///
    /// `30/360` and `Actual/360` select periodic compounding;
    /// `Actual/Actual` and `ACT/ACT` select simple accrual.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compound-periodic" | "compound_periodic" | "compound" | "30/360" | "actual/360"
            | "act/360" => Ok(Convention::CompoundPeriodic),
            "simple-accrual" | "simple_accrual" | "simple" | "actual/actual" | "act/act" => {
                Ok(Convention::SimpleAccrual)
            }
            other => Err(Error::InvalidArgument(format!(
                "unknown convention '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn compound_periodic_factor() {
        let df = discount_factor(Convention::CompoundPeriodic, 0.10, 4, 2).unwrap();
        assert_abs_diff_eq!(df, 1.0 / (1.025_f64 * 1.025), epsilon = 1e-15);
        // (1 + 0.05)^-1
        let df = discount_factor(Convention::CompoundPeriodic, 0.05, 1, 1).unwrap();
        assert_abs_diff_eq!(df, 1.0 / 1.05, epsilon = 1e-15);
    }

    #[test]
    fn simple_accrual_factor() {
        // 1 / (1 + 0.10 * 2/4) = 1 / 1.05
        let df = discount_factor(Convention::SimpleAccrual, 0.10, 4, 2).unwrap();
        assert_abs_diff_eq!(df, 1.0 / 1.05, epsilon = 1e-15);
    }

    #[test]
    fn conventions_agree_on_first_period() {
        let a = discount_factor(Convention::CompoundPeriodic, 0.08, 2, 1).unwrap();
        let b = discount_factor(Convention::SimpleAccrual, 0.08, 2, 1).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-15);
    }

    #[test]
    fn negative_yield_is_allowed() {
        let df = discount_factor(Convention::CompoundPeriodic, -0.01, 4, 4).unwrap();
        assert!(df > 1.0);
        let df = discount_factor(Convention::SimpleAccrual, -0.01, 4, 4).unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn non_positive_compounding_base_is_a_domain_error() {
        // 1 + (-4)/4 = 0
        let err = discount_factor(Convention::CompoundPeriodic, -4.0, 4, 1).unwrap_err();
        assert!(err.is_domain());
        let err = discount_factor(Convention::CompoundPeriodic, -5.0, 4, 3).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn vanishing_simple_denominator_is_a_domain_error() {
        // 1 + (-0.5) * (8/4) = 0
        let err = discount_factor(Convention::SimpleAccrual, -0.5, 4, 8).unwrap_err();
        assert!(err.is_domain());
        // a negative denominator is still a number
        assert!(discount_factor(Convention::SimpleAccrual, -0.6, 4, 8).is_ok());
    }

    #[test]
    fn invalid_inputs() {
        for c in Convention::ALL {
            assert!(c.discount_factor(0.05, 0, 1).unwrap_err().is_invalid_argument());
            assert!(c.discount_factor(0.05, 2, 0).unwrap_err().is_invalid_argument());
            assert!(c
                .discount_factor(f64::NAN, 2, 1)
                .unwrap_err()
                .is_invalid_argument());
        }
    }

    #[test]
    fn parse_names_and_day_count_tags() {
        assert_eq!("30/360".parse::<Convention>(), Ok(Convention::CompoundPeriodic));
        assert_eq!("Actual/360".parse::<Convention>(), Ok(Convention::CompoundPeriodic));
        assert_eq!("Actual/Actual".parse::<Convention>(), Ok(Convention::SimpleAccrual));
        assert_eq!(" act/act ".parse::<Convention>(), Ok(Convention::SimpleAccrual));
        assert_eq!(
            "Simple-Accrual".parse::<Convention>(),
            Ok(Convention::SimpleAccrual)
        );
        assert!("bogus".parse::<Convention>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for c in Convention::ALL {
            assert_eq!(c.to_string().parse::<Convention>(), Ok(c));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_the_canonical_names_only() {
        use serde::de::{value::Error as DeError, IntoDeserializer};
        use serde::Deserialize;

        for c in Convention::ALL {
            let parsed = Convention::deserialize(c.name().into_deserializer());
            assert_eq!(parsed, Ok::<_, DeError>(c));
        }
        // day-count tags go through FromStr
        let tag: std::result::Result<Convention, DeError> =
            Convention::deserialize("30/360".into_deserializer());
        assert!(tag.is_err());
    }
}
