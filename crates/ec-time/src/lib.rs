//! # ec-time
//!
//! Ethiopian and Gregorian date types, calendar conversion, and
//! calendar-safe date arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Day, month, and year arithmetic on `EthiopianDate`.
pub mod arithmetic;

/// Ethiopian ↔ Gregorian conversion.
pub mod converter;

/// `EthiopianDate` type and the Ethiopian calendar rules.
pub mod date;

/// `EthiopianDateTime` — date plus Ethiopian time of day.
pub mod datetime;

/// Proleptic Gregorian calendar arithmetic.
pub mod gregorian;

/// `EthiopianMonth` — the thirteen Ethiopian months.
pub mod month;

/// `EthiopianTime` — the twelve-hour day/night clock.
pub mod time;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use arithmetic::{add_days, add_months, add_years, diff_in_days, diff_in_months, diff_in_years};
pub use converter::{ethiopian_to_gregorian, gregorian_to_ethiopian, new_year};
pub use date::EthiopianDate;
pub use datetime::EthiopianDateTime;
pub use gregorian::GregorianDate;
pub use month::EthiopianMonth;
pub use time::{DayPeriod, EthiopianTime};
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
