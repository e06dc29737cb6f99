//! Error types for ordo.
//!
//! Every fallible operation in the workspace returns this single
//! `thiserror`-derived enum.  Lookup misses are not errors: the engine
//! reports them as `None`.

use thiserror::Error;

use crate::Year;

/// The top-level error type used throughout ordo.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid civil date or date arithmetic leaving the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// A year outside the range the engine is configured to build.
    #[error("year {year} out of supported range [{min}, {max}]")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
        /// First supported year.
        min: Year,
        /// Last supported year.
        max: Year,
    },

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout ordo.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ordo_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ordo_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
