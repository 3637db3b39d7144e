//! `Weekday` — day-of-week enum.

use ec_core::ensure_range;
use ec_core::errors::Result;
use ec_core::Language;

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).  Calendar code that
/// lays out weeks starting on Sunday uses [`Weekday::sunday_index`]
/// (Sunday = 0 … Saturday = 6) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from a Sunday-based index (0 = Sunday … 6 = Saturday).
    ///
    /// This is also the contract for a calendar grid's `week_start`.
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] if `index > 6`.
    pub fn from_sunday_index(index: u8) -> Result<Self> {
        ensure_range!(index, 0, 6, "weekday index");
        Ok(Self::from_sunday_index_unchecked(index))
    }

    pub(crate) fn from_sunday_index_unchecked(index: u8) -> Self {
        match index {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-based index (0 = Sunday … 6 = Saturday).
    pub fn sunday_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Return the weekday `n` days later (negative `n` goes back).
    pub fn add_days(self, n: i32) -> Self {
        let idx = (self.sunday_index() as i32 + n).rem_euclid(7);
        Self::from_sunday_index_unchecked(idx as u8)
    }

    /// Return the weekday name in the given language.
    pub fn name(&self, lang: Language) -> &'static str {
        let (am, en) = match self {
            Weekday::Monday => ("ሰኞ", "Monday"),
            Weekday::Tuesday => ("ማክሰኞ", "Tuesday"),
            Weekday::Wednesday => ("ረቡዕ", "Wednesday"),
            Weekday::Thursday => ("ሐሙስ", "Thursday"),
            Weekday::Friday => ("ዓርብ", "Friday"),
            Weekday::Saturday => ("ቅዳሜ", "Saturday"),
            Weekday::Sunday => ("እሑድ", "Sunday"),
        };
        lang.pick(am, en)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Language::English))
    }
}
