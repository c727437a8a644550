//! Bullet-bond schedule generation and leg queries.
//!
//! A bullet bond pays the same coupon `face · coupon_rate / m` at the end
//! of every nominal period and repays the whole face amount with the last
//! coupon. The number of periods is `trunc(maturity_years · m)`; a
//! maturity shorter than one period gives an empty leg.

use crate::cashflow::{CashFlow, Leg};
use bp_core::{ensure, errors::Result, Rate, Real, Time};

/// Largest number of coupon periods a schedule may hold.
///
/// About 1900 years of weekly coupons. Longer schedules are rejected before
/// any cash flow is allocated.
pub const MAX_PERIODS: u32 = 100_000;

/// Number of whole coupon periods in `maturity_years`.
///
/// The product `maturity_years · periods_per_year` is truncated toward
/// zero, so `2.99` years at quarterly frequency gives 11 periods.
///
/// # Errors
/// `InvalidArgument` when `periods_per_year` is zero, when
/// `maturity_years` is negative or not finite, or when the bond would have
/// more than [`MAX_PERIODS`] periods.
pub fn total_periods(periods_per_year: u32, maturity_years: Time) -> Result<u32> {
    ensure!(periods_per_year > 0, "periods per year must be positive");
    ensure!(
        maturity_years.is_finite() && maturity_years >= 0.0,
        "maturity must be a non-negative number of years, got {maturity_years}"
    );
    let n = (maturity_years * Real::from(periods_per_year)).trunc();
    ensure!(
        n <= Real::from(MAX_PERIODS),
        "maturity of {maturity_years} years has {n} periods, more than {MAX_PERIODS}"
    );
    Ok(n as u32)
}

/// Generate the cash flows of a bullet bond, ordered by period.
///
/// # Errors
/// [`Error::InvalidArgument`](bp_core::Error::InvalidArgument) when
/// `periods_per_year` is zero, when `maturity_years` is negative, not
/// finite or longer than [`MAX_PERIODS`] periods, or when `face_amount` or
/// `coupon_rate` is not finite.
///
/// # Example
/// ```
/// use bp_cashflows::generate_schedule;
/// let leg = generate_schedule(1000.0, 0.08, 4, 2.0).unwrap();
/// assert_eq!(leg.len(), 8);
/// assert_eq!(leg[7].principal_amount, 1000.0);
/// ```
pub fn generate_schedule(
    face_amount: Real,
    coupon_rate: Rate,
    periods_per_year: u32,
    maturity_years: Time,
) -> Result<Leg> {
    ensure!(
        face_amount.is_finite(),
        "face amount must be finite, got {face_amount}"
    );
    ensure!(
        coupon_rate.is_finite(),
        "coupon rate must be finite, got {coupon_rate}"
    );
    let n = total_periods(periods_per_year, maturity_years)?;
    let coupon_per_period = face_amount * coupon_rate / Real::from(periods_per_year);

    Ok((1..=n)
        .map(|t| {
            if t == n {
                CashFlow::redemption(t, coupon_per_period, face_amount)
            } else {
                CashFlow::coupon(t, coupon_per_period)
            }
        })
        .collect())
}

// ── Leg queries ──────────────────────────────────────────────────────────────

/// Undiscounted sum of every payment in the leg.
pub fn total_amount(leg: &[CashFlow]) -> Real {
    leg.iter().map(CashFlow::amount).sum()
}

/// The payment that repays principal, if the leg has one.
pub fn redemption(leg: &[CashFlow]) -> Option<&CashFlow> {
    leg.iter().rev().find(|cf| cf.is_redemption())
}

/// Index of the last period in the leg.
pub fn last_period(leg: &[CashFlow]) -> Option<u32> {
    leg.iter().map(|cf| cf.period_index).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn schedule_shape() {
        let leg = generate_schedule(1000.0, 0.08, 4, 2.0).unwrap();
        assert_eq!(leg.len(), 8);
        for (i, cf) in leg.iter().enumerate() {
            assert_eq!(cf.period_index, i as u32 + 1);
            assert_abs_diff_eq!(cf.coupon_amount, 20.0, epsilon = 1e-12);
        }
        assert!(leg[..7].iter().all(|cf| cf.principal_amount == 0.0));
        assert_eq!(leg[7].principal_amount, 1000.0);
    }

    #[test]
    fn zero_maturity_is_empty() {
        let leg = generate_schedule(1000.0, 0.05, 2, 0.0).unwrap();
        assert!(leg.is_empty());
        assert_eq!(redemption(&leg), None);
        assert_eq!(last_period(&leg), None);
        assert_eq!(total_amount(&leg), 0.0);
    }

    #[test]
    fn maturity_shorter_than_a_period_is_empty() {
        let leg = generate_schedule(100.0, 0.05, 2, 0.4).unwrap();
        assert!(leg.is_empty());
    }

    #[test]
    fn periods_truncate_toward_zero() {
        assert_eq!(total_periods(4, 2.99).unwrap(), 11);
        assert_eq!(total_periods(4, 3.0).unwrap(), 12);
        assert_eq!(total_periods(2, 0.5).unwrap(), 1);
        assert_eq!(total_periods(12, 0.0).unwrap(), 0);
    }

    #[test]
    fn period_count_is_capped() {
        // 52 * 1923 = 99_996
        assert_eq!(total_periods(52, 1923.0).unwrap(), 99_996);
        assert_eq!(total_periods(1, 100_000.0).unwrap(), MAX_PERIODS);
        assert!(total_periods(1, 100_001.0).unwrap_err().is_invalid_argument());
        assert!(total_periods(4, 1e9).unwrap_err().is_invalid_argument());
        assert!(generate_schedule(200.0, 0.10, 4, 1e9)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn single_period_bond() {
        let leg = generate_schedule(100.0, 0.06, 1, 1.0).unwrap();
        assert_eq!(leg.len(), 1);
        assert_abs_diff_eq!(leg[0].amount(), 106.0, epsilon = 1e-12);
        assert!(leg[0].is_redemption());
    }

    #[test]
    fn exactly_one_redemption_of_full_face() {
        let leg = generate_schedule(200.0, 0.10, 4, 4.0).unwrap();
        assert_eq!(leg.len(), 16);
        assert_eq!(leg.iter().filter(|cf| cf.is_redemption()).count(), 1);
        let r = redemption(&leg).unwrap();
        assert_eq!(r.period_index, 16);
        assert_eq!(r.principal_amount, 200.0);
        assert_eq!(last_period(&leg), Some(16));
        // 16 coupons of 5 plus the face
        assert_abs_diff_eq!(total_amount(&leg), 280.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_coupon_has_only_the_redemption_amount() {
        let leg = generate_schedule(100.0, 0.0, 2, 3.0).unwrap();
        assert_eq!(leg.len(), 6);
        assert_abs_diff_eq!(total_amount(&leg), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_inputs() {
        assert!(generate_schedule(100.0, 0.05, 0, 1.0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(generate_schedule(100.0, 0.05, 2, -1.0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(generate_schedule(100.0, 0.05, 2, f64::INFINITY)
            .unwrap_err()
            .is_invalid_argument());
        assert!(generate_schedule(f64::NAN, 0.05, 2, 1.0)
            .unwrap_err()
            .is_invalid_argument());
        assert!(generate_schedule(100.0, f64::NAN, 2, 1.0)
            .unwrap_err()
            .is_invalid_argument());
    }
}
