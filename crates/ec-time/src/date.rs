//! `EthiopianDate` and the Ethiopian calendar rules.
//!
//! The Ethiopian year has twelve months of 30 days followed by Pagume, which
//! has 5 days, or 6 in a leap year.  A year is a leap year when
//! `year % 4 == 3`, i.e. the year before the one divisible by four.
//!
//! Dates are immutable values: every arithmetic operation (see
//! [`crate::arithmetic`]) returns a new date.

use crate::gregorian::GregorianDate;
use crate::month::EthiopianMonth;
use crate::weekday::Weekday;
use ec_core::ensure_range;
use ec_core::errors::Result;

/// A date on the Ethiopian calendar.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Smallest year accepted by [`EthiopianDate::new`].
    pub const MIN_YEAR: i32 = 1;

    /// Largest year accepted by [`EthiopianDate::new`].
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–13), and day-of-month.
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] if the year is outside 1–9999, the
    /// month outside 1–13, or the day outside the month's length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        ensure_range!(year, Self::MIN_YEAR, Self::MAX_YEAR, "year");
        ensure_range!(month, 1, 13, "month");
        ensure_range!(day, 1, days_in_month(year, month), "day");
        Ok(EthiopianDate { year, month, day })
    }

    /// Create the first day of `month` in `year`.
    pub fn first_of_month(year: i32, month: u8) -> Result<Self> {
        Self::new(year, month, 1)
    }

    /// Create Meskerem 1 (Enkutatash) of `year`.
    pub fn new_year(year: i32) -> Result<Self> {
        Self::new(year, 1, 1)
    }

    /// Build a date from components that are not re-validated.
    ///
    /// Used by the converter and the arithmetic layer, whose outputs are
    /// valid by construction for valid inputs.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        EthiopianDate { year, month, day }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month number (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as an enum.
    pub fn ethiopian_month(&self) -> EthiopianMonth {
        EthiopianMonth::from_number(self.month).unwrap_or(EthiopianMonth::Pagume)
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.month as u16 - 1) * 30 + self.day as u16
    }

    /// Return `true` if this date lies in an Ethiopian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Return the weekday, computed on the Gregorian equivalent.
    pub fn weekday(&self) -> Weekday {
        self.to_gregorian().weekday()
    }

    /// Return `true` if this is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.day == self.days_in_month()
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        EthiopianDate {
            day: self.days_in_month(),
            ..self
        }
    }

    /// Return the Gregorian equivalent.
    pub fn to_gregorian(&self) -> GregorianDate {
        crate::converter::ethiopian_to_gregorian(self.year, self.month, self.day)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.ethiopian_month(), self.year)
    }
}

impl std::fmt::Debug for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EthiopianDate({:04}-{:02}-{:02})",
            self.year, self.month, self.day
        )
    }
}

// ── Calendar rules ────────────────────────────────────────────────────────────

/// Whether a given year is an Ethiopian leap year (`year % 4 == 3`).
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in an Ethiopian year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in a given Ethiopian month.
///
/// Months 1–12 have 30 days; Pagume (13) has 6 in a leap year, else 5.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 13 {
        if is_leap_year(year) {
            6
        } else {
            5
        }
    } else {
        30
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
