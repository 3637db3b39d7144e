//! Error types for ethiocal.
//!
//! Every fallible public operation in the workspace returns this single
//! `thiserror`-derived enum.  Validation happens at the public boundary
//! (constructors, parsers, catalog queries); internal arithmetic helpers
//! assume already-validated values.  The `ensure_range!` and `fail!`
//! macros are the shorthand used at those boundaries.

use thiserror::Error;

/// The top-level error type used throughout ethiocal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A textual input that should hold an integer does not.
    #[error("invalid input type: {0}")]
    InvalidInputType(String),

    /// A well-typed numeric input lies outside its domain.
    #[error("{what} {value} out of range [{min}, {max}]")]
    InvalidRange {
        /// Name of the offending parameter (`"month"`, `"day"`, …).
        what: &'static str,
        /// The value that was supplied.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A movable-holiday key with no registered offset.
    #[error("unknown holiday: {0}")]
    UnknownHoliday(String),

    /// Structured text (date string, numeral sequence) is malformed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidRange`].
    pub fn is_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
}

/// Shorthand `Result` type used throughout ethiocal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidRange { .. })` unless `min <= value <= max`.
///
/// # Example
/// ```
/// use ec_core::{ensure_range, errors::Error};
/// fn month(m: u8) -> ec_core::errors::Result<u8> {
///     ensure_range!(m, 1, 13, "month");
///     Ok(m)
/// }
/// assert!(month(13).is_ok());
/// assert!(matches!(month(14), Err(Error::InvalidRange { what: "month", .. })));
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($value:expr, $min:expr, $max:expr, $what:expr) => {{
        let value = $value as i64;
        let min = $min as i64;
        let max = $max as i64;
        if value < min || value > max {
            return Err($crate::errors::Error::InvalidRange {
                what: $what,
                value,
                min,
                max,
            });
        }
    }};
}

/// Return `Err(Error::Parse(..))` immediately.
///
/// # Example
/// ```
/// use ec_core::{fail, errors::Error};
/// fn always_err() -> ec_core::errors::Result<()> {
///     fail!("unexpected token {}", "x");
/// }
/// assert_eq!(always_err(), Err(Error::Parse("unexpected token x".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Parse(format!($($msg)*)))
    };
}
