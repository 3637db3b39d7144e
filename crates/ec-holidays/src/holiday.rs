//! `Holiday` — a resolved holiday occurrence with its metadata.

use ec_time::{EthiopianDate, GregorianDate};

/// Classification tags attached to every holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum HolidayTag {
    /// Public (non-working) holiday.
    Public,
    /// Religious observance.
    Religious,
    /// Ethiopian Orthodox Christian observance.
    Christian,
    /// Muslim observance.
    Muslim,
    /// State or national commemoration.
    State,
    /// Cultural celebration.
    Cultural,
    /// Anything else.
    Other,
}

impl HolidayTag {
    /// All tags.
    pub const ALL: [HolidayTag; 7] = [
        HolidayTag::Public,
        HolidayTag::Religious,
        HolidayTag::Christian,
        HolidayTag::Muslim,
        HolidayTag::State,
        HolidayTag::Cultural,
        HolidayTag::Other,
    ];
}

impl std::fmt::Display for HolidayTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HolidayTag::Public => "PUBLIC",
            HolidayTag::Religious => "RELIGIOUS",
            HolidayTag::Christian => "CHRISTIAN",
            HolidayTag::Muslim => "MUSLIM",
            HolidayTag::State => "STATE",
            HolidayTag::Cultural => "CULTURAL",
            HolidayTag::Other => "OTHER",
        };
        f.write_str(s)
    }
}

/// How reliable a holiday's date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accuracy {
    /// Fixed by rule; no uncertainty.
    #[default]
    Exact,
    /// Estimated; the observed date may differ by up to `days`.
    Estimated {
        /// Maximum expected deviation in days.
        days: u8,
    },
}

/// A holiday resolved against a specific year.
///
/// `name` is in the language the holiday was requested in; `description` is
/// always English.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    /// Stable lowercase key (`"meskel"`, `"tinsaye"`, …).
    pub key: &'static str,
    /// Classification tags.
    pub tags: &'static [HolidayTag],
    /// Localised name.
    pub name: &'static str,
    /// Short English description.
    pub description: &'static str,
    /// First day on the Ethiopian calendar.
    pub ethiopian: EthiopianDate,
    /// First day on the Gregorian calendar.
    pub gregorian: GregorianDate,
    /// Whether the date is derived from a computus rather than a fixed day.
    pub movable: bool,
    /// Number of days the observance spans (1 for single-day holidays).
    pub duration_days: u16,
    /// Exact, or estimated with an error bound.
    pub accuracy: Accuracy,
}

impl Holiday {
    /// Return `true` if the holiday carries `tag`.
    pub fn has_tag(&self, tag: HolidayTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Return `true` if the holiday carries at least one of `tags`.
    ///
    /// An empty filter matches everything.
    pub fn matches_any(&self, tags: &[HolidayTag]) -> bool {
        tags.is_empty() || tags.iter().any(|t| self.has_tag(*t))
    }

    /// Return `true` for estimated dates.
    pub fn is_estimated(&self) -> bool {
        matches!(self.accuracy, Accuracy::Estimated { .. })
    }

    /// Last day of the observance (equal to `ethiopian` for one-day holidays).
    pub fn last_day(&self) -> ec_core::Result<EthiopianDate> {
        self.ethiopian.add_days(self.duration_days as i32 - 1)
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.gregorian, self.ethiopian)?;
        if let Accuracy::Estimated { days } = self.accuracy {
            write!(f, " ±{days}d")?;
        }
        Ok(())
    }
}
