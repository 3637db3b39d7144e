//! Calendar-safe arithmetic on [`EthiopianDate`].
//!
//! Every operation returns a new, valid date:
//! * day arithmetic rolls overflowing days into the following months (Pagume
//!   included) and borrows for negative offsets;
//! * month and year arithmetic saturate the day to the target month's length
//!   (Pagume 6 + 1 year in a common year gives Pagume 5), never rolling
//!   forward into the next month.
//!
//! Differences (`diff_in_*`) are signed: positive when the first argument is
//! the later date.  Month and year differences count only *completed* units,
//! measured from the earlier date to the later one, so
//! `diff_in_months(a, b) == -diff_in_months(b, a)`.

use crate::date::{days_in_month, EthiopianDate};
use crate::time_unit::TimeUnit;
use ec_core::ensure_range;
use ec_core::errors::Result;

/// Days in any four consecutive Ethiopian years (exactly one is a leap year).
const DAYS_PER_CYCLE: i64 = 4 * 365 + 1;

impl EthiopianDate {
    /// Return the serial day number (1 = Meskerem 1 of year 1).
    ///
    /// Sums 365 days per elapsed year, one more per elapsed leap year, then
    /// 30 days per elapsed month and the day of the month.
    pub fn serial(&self) -> i32 {
        let y = self.year() as i64 - 1;
        let elapsed_leap_years = (y + 1).div_euclid(4);
        let serial = 365 * y + elapsed_leap_years + (self.month() as i64 - 1) * 30 + self.day() as i64;
        serial as i32
    }

    /// Advance by `n` days (negative `n` goes back).
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] if the result leaves years 1–9999.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let mut year = self.year() as i64;
        let mut month = self.month();
        let mut day = self.day() as i64 + n as i64;

        // Skip whole four-year cycles so that 1 <= day <= DAYS_PER_CYCLE.
        let cycles = (day - 1).div_euclid(DAYS_PER_CYCLE);
        year += 4 * cycles;
        day -= cycles * DAYS_PER_CYCLE;

        loop {
            let dim = days_in_month(year as i32, month) as i64;
            if day <= dim {
                break;
            }
            day -= dim;
            month += 1;
            if month > 13 {
                month = 1;
                year += 1;
            }
        }
        checked(year, month, day as u8)
    }

    /// Advance by `n` months, clamping the day to the target month's length.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let index = self.month_index() + n as i64;
        let year = index.div_euclid(13);
        let month = (index.rem_euclid(13) + 1) as u8;
        checked(year, month, self.day())
    }

    /// Advance by `n` years, clamping Pagume 6 to Pagume 5 in common years.
    pub fn add_years(self, n: i32) -> Result<Self> {
        checked(self.year() as i64 + n as i64, self.month(), self.day())
    }

    /// Advance by a period expressed in the given time unit.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.saturating_mul(7)),
            TimeUnit::Months => self.add_months(n),
            TimeUnit::Years => self.add_years(n),
        }
    }

    /// Signed number of days from `other` to `self`.
    pub fn diff_in_days(&self, other: &EthiopianDate) -> i32 {
        self.serial() - other.serial()
    }

    /// Signed number of completed months from `other` to `self`.
    ///
    /// The month-index difference, less one when `self.day() < other.day()`.
    /// Only the day numbers are compared, whichever date is later.
    pub fn diff_in_months(&self, other: &EthiopianDate) -> i32 {
        let incomplete = (self.day() < other.day()) as i64;
        (self.month_index() - other.month_index() - incomplete) as i32
    }

    /// Signed number of completed years between `other` and `self`.
    pub fn diff_in_years(&self, other: &EthiopianDate) -> i32 {
        let (later, earlier, sign) = order(self, other);
        let mut years = later.year() as i64 - earlier.year() as i64;
        if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
            years -= 1;
        }
        (sign * years) as i32
    }

    fn month_index(&self) -> i64 {
        self.year() as i64 * 13 + (self.month() as i64 - 1)
    }
}

impl std::ops::Sub<EthiopianDate> for EthiopianDate {
    type Output = i32;
    fn sub(self, rhs: EthiopianDate) -> i32 {
        self.diff_in_days(&rhs)
    }
}

// ── Free-function API ─────────────────────────────────────────────────────────

/// `date` advanced by `n` days.
pub fn add_days(date: EthiopianDate, n: i32) -> Result<EthiopianDate> {
    date.add_days(n)
}

/// `date` advanced by `n` months (day clamped).
pub fn add_months(date: EthiopianDate, n: i32) -> Result<EthiopianDate> {
    date.add_months(n)
}

/// `date` advanced by `n` years (Pagume 6 clamped).
pub fn add_years(date: EthiopianDate, n: i32) -> Result<EthiopianDate> {
    date.add_years(n)
}

/// Signed day difference `a - b`.
pub fn diff_in_days(a: &EthiopianDate, b: &EthiopianDate) -> i32 {
    a.diff_in_days(b)
}

/// Month difference `a - b`, less one when `a.day() < b.day()`.
pub fn diff_in_months(a: &EthiopianDate, b: &EthiopianDate) -> i32 {
    a.diff_in_months(b)
}

/// Signed completed-year difference `a - b`.
pub fn diff_in_years(a: &EthiopianDate, b: &EthiopianDate) -> i32 {
    a.diff_in_years(b)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn order<'a>(a: &'a EthiopianDate, b: &'a EthiopianDate) -> (&'a EthiopianDate, &'a EthiopianDate, i64) {
    if a >= b {
        (a, b, 1)
    } else {
        (b, a, -1)
    }
}

/// Range-check the year and saturate the day to the month's length.
fn checked(year: i64, month: u8, day: u8) -> Result<EthiopianDate> {
    ensure_range!(year, EthiopianDate::MIN_YEAR, EthiopianDate::MAX_YEAR, "year");
    let year = year as i32;
    let day = day.min(days_in_month(year, month));
    Ok(EthiopianDate::from_ymd_unchecked(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(y: i32, m: u8, d: u8) -> EthiopianDate {
        EthiopianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_rolls_through_pagume() {
        assert_eq!(e(2016, 12, 30).add_days(1).unwrap(), e(2016, 13, 1));
        assert_eq!(e(2016, 13, 5).add_days(1).unwrap(), e(2017, 1, 1));
        assert_eq!(e(2015, 13, 5).add_days(1).unwrap(), e(2015, 13, 6));
        assert_eq!(e(2015, 13, 6).add_days(1).unwrap(), e(2016, 1, 1));
    }

    #[test]
    fn test_add_days_negative() {
        assert_eq!(e(2016, 1, 1).add_days(-1).unwrap(), e(2015, 13, 6));
        assert_eq!(e(2017, 1, 1).add_days(-1).unwrap(), e(2016, 13, 5));
        assert_eq!(e(2016, 6, 18).add_days(-30).unwrap(), e(2016, 5, 18));
    }

    #[test]
    fn test_add_days_nineveh_to_fasika() {
        assert_eq!(e(2016, 6, 18).add_days(69).unwrap(), e(2016, 8, 27));
    }

    #[test]
    fn test_add_days_many_cycles() {
        let d = e(2016, 3, 14);
        assert_eq!(d.add_days(4 * 1461).unwrap(), e(2032, 3, 14));
        assert_eq!(d.add_days(-1461).unwrap(), e(2012, 3, 14));
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(e(1, 1, 1).add_days(-1).is_err());
        // 9999 is a leap year, so Pagume 6 is its last day.
        assert_eq!(e(9999, 13, 5).add_days(1).unwrap(), e(9999, 13, 6));
        assert!(e(9999, 13, 6).add_days(1).is_err());
    }

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(e(2016, 12, 30).add_months(1).unwrap(), e(2016, 13, 5));
        assert_eq!(e(2015, 12, 30).add_months(1).unwrap(), e(2015, 13, 6));
        assert_eq!(e(2016, 13, 5).add_months(1).unwrap(), e(2017, 1, 5));
        assert_eq!(e(2016, 1, 10).add_months(-1).unwrap(), e(2015, 13, 6));
        assert_eq!(e(2016, 1, 10).add_months(26).unwrap(), e(2018, 1, 10));
    }

    #[test]
    fn test_add_years_pagume_clamp() {
        assert_eq!(e(2011, 13, 6).add_years(1).unwrap(), e(2012, 13, 5));
        assert_eq!(e(2011, 13, 6).add_years(4).unwrap(), e(2015, 13, 6));
        assert_eq!(e(2016, 5, 11).add_years(-16).unwrap(), e(2000, 5, 11));
        assert!(e(2016, 1, 1).add_years(-2016).is_err());
    }

    #[test]
    fn test_advance() {
        let d = e(2016, 1, 1);
        assert_eq!(d.advance(2, TimeUnit::Weeks).unwrap(), e(2016, 1, 15));
        assert_eq!(d.advance(13, TimeUnit::Months).unwrap(), e(2017, 1, 1));
        assert_eq!(d.advance(1, TimeUnit::Years).unwrap(), e(2017, 1, 1));
    }

    #[test]
    fn test_serial() {
        assert_eq!(e(1, 1, 1).serial(), 1);
        assert_eq!(e(2, 1, 1).serial(), 366);
        // Year 3 is the first leap year.
        assert_eq!(e(4, 1, 1).serial(), 365 * 3 + 2);
        assert_eq!(e(2017, 1, 1) - e(2016, 1, 1), 365);
        assert_eq!(e(2016, 1, 1) - e(2015, 1, 1), 366);
    }

    #[test]
    fn test_diff_in_days() {
        let a = e(2016, 8, 27);
        let b = e(2016, 6, 18);
        assert_eq!(diff_in_days(&a, &b), 69);
        assert_eq!(diff_in_days(&b, &a), -69);
    }

    #[test]
    fn test_diff_in_months() {
        assert_eq!(diff_in_months(&e(2016, 3, 10), &e(2016, 1, 10)), 2);
        assert_eq!(diff_in_months(&e(2016, 3, 9), &e(2016, 1, 10)), 1);
        assert_eq!(diff_in_months(&e(2016, 1, 10), &e(2016, 3, 9)), -2);
        assert_eq!(diff_in_months(&e(2016, 1, 10), &e(2016, 3, 10)), -2);
        assert_eq!(diff_in_months(&e(2016, 1, 9), &e(2016, 3, 10)), -3);
        assert_eq!(diff_in_months(&e(2017, 1, 1), &e(2016, 1, 1)), 13);
        assert_eq!(diff_in_months(&e(2016, 1, 1), &e(2016, 1, 30)), -1);
        assert_eq!(diff_in_months(&e(2016, 1, 30), &e(2016, 1, 1)), 0);
    }

    #[test]
    fn test_diff_in_years() {
        assert_eq!(diff_in_years(&e(2016, 5, 10), &e(2000, 5, 10)), 16);
        assert_eq!(diff_in_years(&e(2016, 5, 9), &e(2000, 5, 10)), 15);
        assert_eq!(diff_in_years(&e(2000, 5, 10), &e(2016, 5, 9)), -15);
        assert_eq!(diff_in_years(&e(2012, 13, 5), &e(2011, 13, 6)), 0);
    }
}
