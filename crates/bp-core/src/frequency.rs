//! `Frequency`: how often a bond pays its coupon.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// Coupon payment frequency.
///
/// The discriminant is the number of payments per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Frequency {
    /// Once per year.
    Annual = 1,
    /// Twice per year.
    Semiannual = 2,
    /// Every fourth month.
    EveryFourthMonth = 3,
    /// Four times per year.
    Quarterly = 4,
    /// Six times per year.
    Bimonthly = 6,
    /// Twelve times per year.
    Monthly = 12,
    /// Thirteen times per year.
    EveryFourthWeek = 13,
    /// Twenty-six times per year.
    Biweekly = 26,
    /// Fifty-two times per year.
    Weekly = 52,
}

impl Frequency {
    /// Number of coupon periods per year.
    pub fn periods_per_year(&self) -> u32 {
        *self as u32
    }

    /// The named frequency with exactly `n` periods per year, if any.
    pub fn from_periods_per_year(n: u32) -> Option<Frequency> {
        match n {
            1 => Some(Frequency::Annual),
            2 => Some(Frequency::Semiannual),
            3 => Some(Frequency::EveryFourthMonth),
            4 => Some(Frequency::Quarterly),
            6 => Some(Frequency::Bimonthly),
            12 => Some(Frequency::Monthly),
            13 => Some(Frequency::EveryFourthWeek),
            26 => Some(Frequency::Biweekly),
            52 => Some(Frequency::Weekly),
            _ => None,
        }
    }
}

impl From<Frequency> for u32 {
    fn from(f: Frequency) -> u32 {
        f.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::EveryFourthMonth => "Every-Fourth-Month",
            Frequency::Quarterly => "Quarterly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Monthly => "Monthly",
            Frequency::EveryFourthWeek => "Every-Fourth-Week",
            Frequency::Biweekly => "Biweekly",
            Frequency::Weekly => "Weekly",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Accepts a name (`quarterly`, `Semiannual`, ...) or a count (`4`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return Frequency::from_periods_per_year(n).ok_or_else(|| {
                Error::InvalidArgument(format!("no named frequency with {n} periods per year"))
            });
        }
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "annual" => Ok(Frequency::Annual),
            "semiannual" | "semi-annual" => Ok(Frequency::Semiannual),
            "every-fourth-month" => Ok(Frequency::EveryFourthMonth),
            "quarterly" => Ok(Frequency::Quarterly),
            "bimonthly" => Ok(Frequency::Bimonthly),
            "monthly" => Ok(Frequency::Monthly),
            "every-fourth-week" => Ok(Frequency::EveryFourthWeek),
            "biweekly" => Ok(Frequency::Biweekly),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(Error::InvalidArgument(format!("unknown frequency '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_round_trip() {
        for n in [1, 2, 3, 4, 6, 12, 13, 26, 52] {
            let f = Frequency::from_periods_per_year(n).unwrap();
            assert_eq!(f.periods_per_year(), n);
        }
        assert_eq!(Frequency::from_periods_per_year(5), None);
        assert_eq!(Frequency::from_periods_per_year(0), None);
    }

    #[test]
    fn parse() {
        assert_eq!("quarterly".parse::<Frequency>(), Ok(Frequency::Quarterly));
        assert_eq!("Semi-Annual".parse::<Frequency>(), Ok(Frequency::Semiannual));
        assert_eq!("12".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert!("7".parse::<Frequency>().is_err());
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Frequency::EveryFourthWeek.to_string(), "Every-Fourth-Week");
        assert_eq!(
            Frequency::EveryFourthWeek.to_string().parse::<Frequency>(),
            Ok(Frequency::EveryFourthWeek)
        );
    }
}
