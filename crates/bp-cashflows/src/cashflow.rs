//! `CashFlow`: one nominal period's payment of a bullet bond.

use bp_core::Real;

/// The payment made at the end of one coupon period.
///
/// Periods are numbered from 1. `principal_amount` is zero everywhere
/// except on the redemption period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashFlow {
    /// 1-based index of the period this payment closes.
    pub period_index: u32,
    /// Coupon paid in this period.
    pub coupon_amount: Real,
    /// Principal repaid in this period.
    pub principal_amount: Real,
}

impl CashFlow {
    /// A coupon-only payment.
    pub fn coupon(period_index: u32, coupon_amount: Real) -> Self {
        Self {
            period_index,
            coupon_amount,
            principal_amount: 0.0,
        }
    }

    /// A coupon payment together with the repayment of `principal_amount`.
    pub fn redemption(period_index: u32, coupon_amount: Real, principal_amount: Real) -> Self {
        Self {
            period_index,
            coupon_amount,
            principal_amount,
        }
    }

    /// Total amount paid: coupon plus principal.
    pub fn amount(&self) -> Real {
        self.coupon_amount + self.principal_amount
    }

    /// Whether this payment repays principal.
    pub fn is_redemption(&self) -> bool {
        self.principal_amount != 0.0
    }
}

/// A `Leg` is the ordered sequence of a bond's cash flows.
pub type Leg = Vec<CashFlow>;
