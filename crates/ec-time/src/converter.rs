//! Ethiopian ↔ Gregorian date conversion.
//!
//! Both directions are anchored on the Gregorian date of the Ethiopian New
//! Year (Meskerem 1), which always falls in Gregorian year `y + 7`.  For
//! Gregorian years 1900–2098 it is September 11, or September 12 when
//! Gregorian year `y + 8` is a leap year (the preceding Pagume then has a
//! sixth day).  Outside that window the Gregorian century rule lets the two
//! calendars drift by a day per non-leap century, so the anchor is counted
//! from the Ethiopian epoch instead of being read off that rule.
//!
//! The raw functions take plain integers and do not validate; callers check
//! their input with [`EthiopianDate::new`] / [`GregorianDate::new`] first.
//! The `to_*`/`from_*` methods on the date types are the checked entry points.

use crate::date::EthiopianDate;
use crate::gregorian::{self, GregorianDate};
use ec_core::ensure_range;
use ec_core::errors::Result;

/// Gregorian serial of Meskerem 1, year 1 (Julian August 29, 8 AD).
const ETHIOPIAN_EPOCH: i32 = 2796;

/// Gregorian date of Meskerem 1 of `eth_year`.
pub fn new_year(eth_year: i32) -> GregorianDate {
    let elapsed = 365 * (eth_year - 1) + eth_year.div_euclid(4);
    GregorianDate::from_serial_unchecked(ETHIOPIAN_EPOCH + elapsed)
}

/// Convert an Ethiopian date to the Gregorian calendar.
///
/// Inputs are not validated.
pub fn ethiopian_to_gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    let anchor = new_year(year);
    let days_since_new_year = (month as i32 - 1) * 30 + day as i32 - 1;

    let mut g_year = anchor.year();
    let mut ordinal = anchor.day_of_year() as i32 + days_since_new_year;
    while ordinal > gregorian::days_in_year(g_year) as i32 {
        ordinal -= gregorian::days_in_year(g_year) as i32;
        g_year += 1;
    }
    while ordinal < 1 {
        g_year -= 1;
        ordinal += gregorian::days_in_year(g_year) as i32;
    }
    let (m, d) = gregorian::month_day_from_day_of_year(g_year, ordinal as u16);
    GregorianDate::from_ymd_unchecked(g_year, m, d)
}

/// Convert a Gregorian date to the Ethiopian calendar.
///
/// Inputs are not validated.  Dates before Meskerem 1 of Ethiopian year 1
/// yield years below 1.
pub fn gregorian_to_ethiopian(year: i32, month: u8, day: u8) -> EthiopianDate {
    let ordinal = gregorian::day_of_year(year, month, day) as i32;
    let this_new_year = new_year(year - 7).day_of_year() as i32;

    let (eth_year, days_since_new_year) = if ordinal >= this_new_year {
        (year - 7, ordinal - this_new_year)
    } else {
        // Wrap through the tail of the previous Gregorian year.
        let prev_new_year = new_year(year - 8).day_of_year() as i32;
        let prev_len = gregorian::days_in_year(year - 1) as i32;
        (year - 8, prev_len - prev_new_year + ordinal)
    };

    let month = (days_since_new_year / 30 + 1) as u8;
    let day = (days_since_new_year % 30 + 1) as u8;
    EthiopianDate::from_ymd_unchecked(eth_year, month, day)
}

impl EthiopianDate {
    /// Convert a Gregorian date to the Ethiopian calendar.
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] if the result lies before Ethiopian
    /// year 1 or after year 9999.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self> {
        let eth = gregorian_to_ethiopian(date.year(), date.month(), date.day());
        ensure_range!(
            eth.year(),
            EthiopianDate::MIN_YEAR,
            EthiopianDate::MAX_YEAR,
            "year"
        );
        Ok(eth)
    }
}

impl GregorianDate {
    /// Convert to the Ethiopian calendar.
    ///
    /// See [`EthiopianDate::from_gregorian`].
    pub fn to_ethiopian(&self) -> Result<EthiopianDate> {
        EthiopianDate::from_gregorian(*self)
    }
}
