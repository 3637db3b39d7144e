//! Proleptic Gregorian calendar arithmetic.
//!
//! Day-of-year ordinals, the leap-year rule, and a day serial are all this
//! crate needs from the Gregorian side: the Ethiopian converter works in
//! day-of-year ordinals anchored on the Ethiopian New Year, and the serial
//! gives O(1) day arithmetic for callers that estimate dates by shifting.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 (proleptic Gregorian, a Monday).
//! * The validated range is years 1 to 10007, which covers the Gregorian
//!   image of every Ethiopian date in years 1 to 9999.

use crate::weekday::Weekday;
use ec_core::ensure_range;
use ec_core::errors::{Error, Result};

/// A date on the proleptic Gregorian calendar.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Smallest year accepted by [`GregorianDate::new`].
    pub const MIN_YEAR: i32 = 1;

    /// Largest year accepted by [`GregorianDate::new`].
    ///
    /// Pagume 6 of Ethiopian year 9999 is 10007-11-10.
    pub const MAX_YEAR: i32 = 10_007;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if any component is outside its domain.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        ensure_range!(year, Self::MIN_YEAR, Self::MAX_YEAR, "year");
        ensure_range!(month, 1, 12, "month");
        ensure_range!(day, 1, days_in_month(year, month), "day");
        Ok(GregorianDate { year, month, day })
    }

    /// Create a date from a year and a 1-based day of that year.
    pub fn from_day_of_year(year: i32, doy: u16) -> Result<Self> {
        ensure_range!(year, Self::MIN_YEAR, Self::MAX_YEAR, "year");
        ensure_range!(doy, 1, days_in_year(year), "day of year");
        let (month, day) = month_day_from_day_of_year(year, doy);
        Ok(GregorianDate { year, month, day })
    }

    /// Create a date from its serial number (1 = 0001-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let max = serial_from_ymd(Self::MAX_YEAR, 12, 31);
        ensure_range!(serial, 1, max, "serial");
        Ok(Self::from_serial_unchecked(serial))
    }

    /// Build a date from components that are already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        GregorianDate { year, month, day }
    }

    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        let (year, doy) = year_doy_from_serial(serial);
        let (month, day) = month_day_from_day_of_year(year, doy);
        GregorianDate { year, month, day }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Return `true` if this date lies in a Gregorian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Return the serial number (1 = 0001-01-01).
    pub fn serial(&self) -> i32 {
        serial_from_ymd(self.year, self.month, self.day)
    }

    /// Return the weekday (Zeller's congruence).
    pub fn weekday(&self) -> Weekday {
        weekday(self.year, self.month, self.day)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if the result leaves years 1–10007.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .serial()
            .checked_add(n)
            .ok_or(Error::InvalidRange {
                what: "day offset",
                value: n as i64,
                min: i32::MIN as i64,
                max: i32::MAX as i64,
            })?;
        Self::from_serial(serial)
    }

    /// Return the number of days from `other` to `self`.
    pub fn days_since(&self, other: GregorianDate) -> i32 {
        self.serial() - other.serial()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GregorianDate({self})")
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        GregorianDate::new(d.year(), d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<GregorianDate> for chrono::NaiveDate {
    fn from(d: GregorianDate) -> Self {
        // Every validated GregorianDate is representable by chrono.
        chrono::NaiveDate::from_ymd_opt(d.year, d.month as u32, d.day as u32)
            .unwrap_or(chrono::NaiveDate::MIN)
    }
}

// ── Day counter ───────────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Day of the year (1-based) for a valid month/day.
pub fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let mut doy = MONTH_OFFSET[month as usize - 1] + day as u16;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Inverse of [`day_of_year`]: cumulative month-length subtraction.
///
/// `doy` must lie in `1..=days_in_year(year)`.
pub fn month_day_from_day_of_year(year: i32, doy: u16) -> (u8, u8) {
    let mut month = 1u8;
    let mut remaining = doy;
    while month < 12 {
        let days = days_in_month(year, month) as u16;
        if remaining <= days {
            break;
        }
        remaining -= days;
        month += 1;
    }
    (month, remaining as u8)
}

/// Weekday by Zeller's congruence.
pub fn weekday(year: i32, month: u8, day: u8) -> Weekday {
    // January and February count as months 13 and 14 of the previous year.
    let (y, m) = if month < 3 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);
    let h = (day as i32 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
    // h: 0 = Saturday, 1 = Sunday, … 6 = Friday
    Weekday::from_sunday_index_unchecked(((h + 6) % 7) as u8)
}

fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let y = year - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + day_of_year(year, month, day) as i32
}

fn year_doy_from_serial(serial: i32) -> (i32, u16) {
    // Estimate the year from the mean Gregorian year, then adjust.
    let mut y = ((serial as i64 * 400) / 146_097) as i32 + 1;
    loop {
        let start = serial_from_ymd(y, 1, 1);
        if serial < start {
            y -= 1;
        } else if serial >= start + days_in_year(y) as i32 {
            y += 1;
        } else {
            return (y, (serial - start + 1) as u16);
        }
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_day_of_year_roundtrip() {
        for year in [2023, 2024, 1900, 2000] {
            for doy in 1..=days_in_year(year) {
                let (m, d) = month_day_from_day_of_year(year, doy);
                assert_eq!(day_of_year(year, m, d), doy, "{year} doy {doy}");
            }
        }
    }

    #[test]
    fn test_serial_epoch() {
        let d = GregorianDate::new(1, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(GregorianDate::from_serial(1).unwrap(), d);
    }

    #[test]
    fn test_serial_roundtrip() {
        for (y, m, d) in [(1, 12, 31), (1900, 3, 1), (2000, 2, 29), (2024, 9, 10), (9999, 12, 31)] {
            let date = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(GregorianDate::from_serial(date.serial()).unwrap(), date);
        }
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(GregorianDate::new(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2023-10-21 is a Saturday
        assert_eq!(GregorianDate::new(2023, 10, 21).unwrap().weekday(), Weekday::Saturday);
        // 2000-02-29 is a Tuesday
        assert_eq!(GregorianDate::new(2000, 2, 29).unwrap().weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_weekday_matches_serial() {
        // Serial 1 is a Monday, so (serial - 1) % 7 == 0 on Mondays.
        let mut d = GregorianDate::new(1999, 12, 1).unwrap();
        for _ in 0..800 {
            let expected = ((d.serial() - 1).rem_euclid(7) + 1) as u8;
            assert_eq!(d.weekday().ordinal(), expected, "{d}");
            d = d.add_days(1).unwrap();
        }
    }

    #[test]
    fn test_validation() {
        assert!(GregorianDate::new(2023, 2, 29).is_err());
        assert!(GregorianDate::new(2023, 13, 1).is_err());
        assert!(GregorianDate::new(0, 1, 1).is_err());
        assert!(GregorianDate::from_day_of_year(2023, 366).is_err());
        assert_eq!(
            GregorianDate::from_day_of_year(2024, 366).unwrap(),
            GregorianDate::new(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_add_days() {
        let d = GregorianDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap(), GregorianDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(61).unwrap(), GregorianDate::new(2024, 3, 1).unwrap());
        assert_eq!(
            GregorianDate::new(9999, 12, 31).unwrap().add_days(1).unwrap(),
            GregorianDate::new(10_000, 1, 1).unwrap()
        );
        assert!(GregorianDate::new(10_007, 12, 31).unwrap().add_days(1).is_err());
        assert!(GregorianDate::new(10_008, 1, 1).is_err());
        assert_eq!(
            GregorianDate::new(2024, 3, 1).unwrap().days_since(d),
            61
        );
    }

    #[test]
    fn test_display() {
        let d = GregorianDate::new(2024, 9, 10).unwrap();
        assert_eq!(d.to_string(), "2024-09-10");
        assert_eq!(format!("{d:?}"), "GregorianDate(2024-09-10)");
    }
}
