//! `EthiopianDateTime` — an Ethiopian date paired with an Ethiopian time.
//!
//! The value is immutable; every transformation returns a new instance, so
//! calls chain naturally:
//!
//! ```
//! use ec_time::{DayPeriod, EthiopianDate, EthiopianDateTime, EthiopianTime};
//!
//! let start = EthiopianDateTime::from_date(EthiopianDate::new(2016, 1, 1)?);
//! let later = start
//!     .add_days(16)?
//!     .with_time(EthiopianTime::new(3, 30, DayPeriod::Day)?);
//! assert_eq!(later.date(), EthiopianDate::new(2016, 1, 17)?);
//! assert_eq!(later.to_gregorian().1, 9); // 09:30
//! # Ok::<(), ec_core::Error>(())
//! ```
//!
//! The calendar date changes at Gregorian midnight, so 01:00 (7 o'clock of
//! the night) belongs to the same date as the daylight hours that follow it.

use crate::date::EthiopianDate;
use crate::gregorian::GregorianDate;
use crate::time::EthiopianTime;
use crate::time_unit::TimeUnit;
use ec_core::errors::Result;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// An Ethiopian date with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopianDateTime {
    date: EthiopianDate,
    time: EthiopianTime,
}

impl EthiopianDateTime {
    /// Pair a date with a time.
    pub fn new(date: EthiopianDate, time: EthiopianTime) -> Self {
        EthiopianDateTime { date, time }
    }

    /// A date at 12:00 of the day period (Gregorian 06:00).
    pub fn from_date(date: EthiopianDate) -> Self {
        Self::new(date, EthiopianTime::default())
    }

    /// Convert a Gregorian date and 24-hour clock time.
    pub fn from_gregorian(date: GregorianDate, hour: u8, minute: u8) -> Result<Self> {
        Ok(Self::new(
            EthiopianDate::from_gregorian(date)?,
            EthiopianTime::from_gregorian(hour, minute)?,
        ))
    }

    /// The current local date and time.
    #[cfg(feature = "chrono")]
    pub fn now() -> Result<Self> {
        use chrono::Timelike;
        let now = chrono::Local::now().naive_local();
        let date = GregorianDate::try_from(now.date())?;
        Self::from_gregorian(date, now.hour() as u8, now.minute() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The Ethiopian date.
    pub fn date(&self) -> EthiopianDate {
        self.date
    }

    /// The Ethiopian time of day.
    pub fn time(&self) -> EthiopianTime {
        self.time
    }

    /// The Gregorian date and 24-hour clock `(date, hour, minute)`.
    pub fn to_gregorian(&self) -> (GregorianDate, u8, u8) {
        let (hour, minute) = self.time.to_gregorian();
        (self.date.to_gregorian(), hour, minute)
    }

    // ── Transformations ───────────────────────────────────────────────────────

    /// Same date, different time.
    pub fn with_time(self, time: EthiopianTime) -> Self {
        Self { time, ..self }
    }

    /// Same time, different date.
    pub fn with_date(self, date: EthiopianDate) -> Self {
        Self { date, ..self }
    }

    /// Advance the date by `n` days, keeping the time.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Ok(self.with_date(self.date.add_days(n)?))
    }

    /// Advance the date by `n` months, keeping the time.
    pub fn add_months(self, n: i32) -> Result<Self> {
        Ok(self.with_date(self.date.add_months(n)?))
    }

    /// Advance the date by `n` years, keeping the time.
    pub fn add_years(self, n: i32) -> Result<Self> {
        Ok(self.with_date(self.date.add_years(n)?))
    }

    /// Advance the date by a period in the given unit.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        Ok(self.with_date(self.date.advance(n, unit)?))
    }

    /// Advance by `n` minutes, rolling the date at Gregorian midnight.
    pub fn add_minutes(self, n: i64) -> Result<Self> {
        let total = self.minute_of_day() + n;
        let days = total.div_euclid(MINUTES_PER_DAY);
        let minute_of_day = total.rem_euclid(MINUTES_PER_DAY);
        let days = i32::try_from(days).map_err(|_| ec_core::Error::InvalidRange {
            what: "minute offset",
            value: n,
            min: i32::MIN as i64 * MINUTES_PER_DAY,
            max: i32::MAX as i64 * MINUTES_PER_DAY,
        })?;
        let time = EthiopianTime::from_gregorian((minute_of_day / 60) as u8, (minute_of_day % 60) as u8)?;
        Ok(Self::new(self.date.add_days(days)?, time))
    }

    /// Advance by `n` hours, rolling the date at Gregorian midnight.
    pub fn add_hours(self, n: i64) -> Result<Self> {
        self.add_minutes(n.saturating_mul(60))
    }

    // ── Differences ───────────────────────────────────────────────────────────

    /// Signed calendar-day difference between the two dates.
    pub fn diff_in_days(&self, other: &EthiopianDateTime) -> i32 {
        self.date.diff_in_days(&other.date)
    }

    /// Signed completed-month difference between the two dates.
    pub fn diff_in_months(&self, other: &EthiopianDateTime) -> i32 {
        self.date.diff_in_months(&other.date)
    }

    /// Signed completed-year difference between the two dates.
    pub fn diff_in_years(&self, other: &EthiopianDateTime) -> i32 {
        self.date.diff_in_years(&other.date)
    }

    /// Signed difference in minutes.
    pub fn diff_in_minutes(&self, other: &EthiopianDateTime) -> i64 {
        self.diff_in_days(other) as i64 * MINUTES_PER_DAY + self.minute_of_day() - other.minute_of_day()
    }

    fn minute_of_day(&self) -> i64 {
        let (h, m) = self.time.to_gregorian();
        h as i64 * 60 + m as i64
    }
}

impl PartialOrd for EthiopianDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopianDateTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.date, self.minute_of_day()).cmp(&(other.date, other.minute_of_day()))
    }
}

impl std::fmt::Display for EthiopianDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
