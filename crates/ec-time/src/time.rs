//! Ethiopian time of day.
//!
//! Ethiopian clocks count twelve hours of daylight and twelve of night.  The
//! day period starts at Gregorian 06:00 (12 o'clock of the day); 07:00 is
//! 1 o'clock, 17:59 is 11:59, and 18:00 starts the night at 12 o'clock.

use ec_core::ensure_range;
use ec_core::errors::Result;

/// Day or night half of the Ethiopian clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayPeriod {
    /// Gregorian 06:00–17:59.
    Day,
    /// Gregorian 18:00–05:59.
    Night,
}

/// A time of day on the Ethiopian clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopianTime {
    hour: u8,
    minute: u8,
    period: DayPeriod,
}

impl EthiopianTime {
    /// Create a time from an Ethiopian hour (1–12), minute, and period.
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] for an hour outside 1–12 or a minute
    /// outside 0–59.
    pub fn new(hour: u8, minute: u8, period: DayPeriod) -> Result<Self> {
        ensure_range!(hour, 1, 12, "hour");
        ensure_range!(minute, 0, 59, "minute");
        Ok(EthiopianTime {
            hour,
            minute,
            period,
        })
    }

    /// Convert a Gregorian 24-hour clock time.
    pub fn from_gregorian(hour: u8, minute: u8) -> Result<Self> {
        ensure_range!(hour, 0, 23, "hour");
        ensure_range!(minute, 0, 59, "minute");
        let period = if (6..18).contains(&hour) {
            DayPeriod::Day
        } else {
            DayPeriod::Night
        };
        let eth_hour = match (hour + 6) % 12 {
            0 => 12,
            h => h,
        };
        Ok(EthiopianTime {
            hour: eth_hour,
            minute,
            period,
        })
    }

    /// Return the Gregorian 24-hour clock `(hour, minute)`.
    pub fn to_gregorian(&self) -> (u8, u8) {
        let base = self.hour % 12;
        let hour = match self.period {
            DayPeriod::Day => base + 6,
            DayPeriod::Night => (base + 18) % 24,
        };
        (hour, self.minute)
    }

    /// Ethiopian hour (1–12).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Day or night.
    pub fn period(&self) -> DayPeriod {
        self.period
    }

    /// Minutes elapsed since 06:00 (start of the Ethiopian day), 0–1439.
    pub fn minutes_since_dawn(&self) -> u16 {
        let (h, m) = self.to_gregorian();
        ((h as u16 + 18) % 24) * 60 + m as u16
    }
}

impl Default for EthiopianTime {
    /// 12:00 of the day period (Gregorian 06:00).
    fn default() -> Self {
        EthiopianTime {
            hour: 12,
            minute: 0,
            period: DayPeriod::Day,
        }
    }
}

impl std::fmt::Display for EthiopianTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let period = match self.period {
            DayPeriod::Day => "day",
            DayPeriod::Night => "night",
        };
        write!(f, "{}:{:02} {period}", self.hour, self.minute)
    }
}
