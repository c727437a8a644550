//! Error types for bondprice.
//!
//! Every failure in the library is a value of the single [`Error`] enum.
//! Inputs are checked with the [`ensure!`](crate::ensure) and
//! [`ensure_domain!`](crate::ensure_domain) macros, which return early with
//! the matching variant.

use thiserror::Error;

/// The top-level error type used throughout bondprice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input violates a precondition (non-positive face amount,
    /// zero frequency, negative maturity, non-finite rate, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A discount factor is undefined for the requested yield under the
    /// selected convention.
    #[error("domain error: {0}")]
    Domain(String),
}

impl Error {
    /// Whether this is an [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Whether this is an [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

/// Shorthand `Result` type used throughout bondprice.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bp_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bp_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bp_core::{ensure_domain, errors::Error};
/// fn sqrt(x: f64) -> bp_core::errors::Result<f64> {
///     ensure_domain!(x >= 0.0, "cannot take the square root of {x}");
///     Ok(x.sqrt())
/// }
/// assert!(sqrt(4.0).is_ok());
/// assert!(matches!(sqrt(-1.0), Err(Error::Domain(_))));
/// ```
#[macro_export]
macro_rules! ensure_domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}
