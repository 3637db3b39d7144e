//! # ethiocal
//!
//! Ethiopian ↔ Gregorian conversion, Ethiopian date arithmetic, the Bahire
//! Hasab movable-feast computus, and a holiday catalog.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! a flat, validated function API.  Application code should depend on this
//! crate rather than the individual `ec-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use ethiocal::{ethiopian_to_gregorian, get_movable_holiday, gregorian_to_ethiopian};
//!
//! let greg = ethiopian_to_gregorian(2016, 13, 5)?;
//! assert_eq!(greg.to_string(), "2024-09-10");
//!
//! let eth = gregorian_to_ethiopian(2025, 5, 22)?;
//! assert_eq!((eth.year(), eth.month(), eth.day()), (2017, 9, 14));
//!
//! let fasika = get_movable_holiday("fasika", 2016)?;
//! assert_eq!(fasika.to_string(), "27 Miyazia 2016");
//! # Ok::<(), ethiocal::Error>(())
//! ```
//!
//! Textual input is parsed explicitly before it reaches the calendar code:
//!
//! ```rust
//! use ethiocal::parse::parse_year_lenient;
//!
//! let year = parse_year_lenient("፳፻፲፮")?;
//! let bh = ethiocal::get_bahire_hasab(year, ethiocal::Language::English)?;
//! assert_eq!(bh.metqi, 10);
//! # Ok::<(), ethiocal::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, language selection, and input parsers.
pub use ec_core as core;

/// Date types, conversion, and arithmetic.
pub use ec_time as time;

/// Bahire Hasab and the holiday catalog.
pub use ec_holidays as holidays;

/// Explicit parsers for textual and Ge'ez-numeral input.
pub use ec_core::utilities::data_parsers as parse;

/// Tracing subscriber setup.
#[cfg(feature = "logging")]
pub mod logging;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ec_core::{Error, Language, Result};
pub use ec_holidays::{
    get_bahire_hasab, get_movable_holiday, holidays_in_year, Accuracy, BahireHasab, Evangelist,
    Holiday, HolidayCatalog, HolidayOptions, HolidayTag, MovableFeast,
};
pub use ec_time::{
    add_days, add_months, add_years, diff_in_days, diff_in_months, diff_in_years, DayPeriod,
    EthiopianDate, EthiopianDateTime, EthiopianMonth, EthiopianTime, GregorianDate, TimeUnit,
    Weekday,
};

// ── Validated free functions ──────────────────────────────────────────────────

/// Convert an Ethiopian date to the Gregorian calendar.
///
/// # Errors
/// [`Error::InvalidRange`] if the Ethiopian date is not valid.
pub fn ethiopian_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate> {
    Ok(EthiopianDate::new(year, month, day)?.to_gregorian())
}

/// Convert a Gregorian date to the Ethiopian calendar.
///
/// # Errors
/// [`Error::InvalidRange`] if the Gregorian date is not valid or precedes
/// Meskerem 1 of Ethiopian year 1.
pub fn gregorian_to_ethiopian(year: i32, month: u8, day: u8) -> Result<EthiopianDate> {
    GregorianDate::new(year, month, day)?.to_ethiopian()
}

/// Whether `year` is an Ethiopian leap year (`year % 4 == 3`).
pub fn is_ethiopian_leap_year(year: i32) -> bool {
    ec_time::date::is_leap_year(year)
}

/// Number of days in an Ethiopian month: 30, or 5/6 for Pagume.
///
/// # Errors
/// [`Error::InvalidRange`] if `month` is outside 1–13.
pub fn days_in_ethiopian_month(year: i32, month: u8) -> Result<u8> {
    ec_core::ensure_range!(month, 1, 13, "month");
    Ok(ec_time::date::days_in_month(year, month))
}

/// Holidays of an Ethiopian month, sorted by day.
///
/// Merges fixed holidays, the Bahire Hasab feasts of the year, and (unless
/// disabled in `options`) estimated Islamic holidays.
pub fn get_holidays_in_month(year: i32, month: u8, options: &HolidayOptions) -> Result<Vec<Holiday>> {
    ec_holidays::holidays_in_month(year, month, options)
}
