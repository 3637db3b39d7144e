//! Estimated Islamic holidays.
//!
//! This is a linear-shift heuristic, not Hijri arithmetic.  Each holiday has
//! one observed Gregorian date in Ethiopia (1444/1445 AH); the k-th
//! recurrence is placed `round(k × 10631 / 30)` days later, 10631 / 30 being
//! the mean length of the arithmetic Islamic year.  Actual observance depends
//! on moon sighting, so every result is marked `Accuracy::Estimated` (±1 day).

use crate::holiday::{Accuracy, Holiday, HolidayTag};
use ec_core::errors::Result;
use ec_core::Language;
use ec_time::{EthiopianDate, GregorianDate};
use tracing::trace;

/// Days in 30 arithmetic Islamic years.
const DAYS_PER_30_YEARS: i64 = 10_631;

/// Error bound attached to every estimate.
pub const ESTIMATE_TOLERANCE_DAYS: u8 = 1;

const TAGS: &[HolidayTag] = &[HolidayTag::Public, HolidayTag::Religious, HolidayTag::Muslim];

/// An Islamic holiday observed as a public holiday in Ethiopia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IslamicHoliday {
    /// Eid al-Fitr, end of Ramadan (1 Shawwal).
    EidAlFitr,
    /// Eid al-Adha / Arafa (10 Dhu al-Hijjah).
    EidAlAdha,
    /// Mawlid, the Prophet's birthday (12 Rabi al-Awwal).
    Mawlid,
}

impl IslamicHoliday {
    /// All estimated Islamic holidays.
    pub const ALL: [IslamicHoliday; 3] = [
        IslamicHoliday::EidAlFitr,
        IslamicHoliday::EidAlAdha,
        IslamicHoliday::Mawlid,
    ];

    /// Stable lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            IslamicHoliday::EidAlFitr => "eid_al_fitr",
            IslamicHoliday::EidAlAdha => "eid_al_adha",
            IslamicHoliday::Mawlid => "mawlid",
        }
    }

    /// Localised name.
    pub fn name(&self, lang: Language) -> &'static str {
        match self {
            IslamicHoliday::EidAlFitr => lang.pick("ኢድ አል ፈጥር", "Eid al-Fitr"),
            IslamicHoliday::EidAlAdha => lang.pick("ኢድ አል አድሐ (አረፋ)", "Eid al-Adha (Arafa)"),
            IslamicHoliday::Mawlid => lang.pick("መውሊድ", "Mawlid"),
        }
    }

    /// Short English description.
    pub fn description(&self) -> &'static str {
        match self {
            IslamicHoliday::EidAlFitr => "End of the fast of Ramadan",
            IslamicHoliday::EidAlAdha => "Feast of the Sacrifice",
            IslamicHoliday::Mawlid => "Birthday of the Prophet Muhammad",
        }
    }

    /// Observed Gregorian date used as the zeroth recurrence.
    fn anchor(&self) -> (i32, u8, u8) {
        match self {
            IslamicHoliday::EidAlFitr => (2023, 4, 21),
            IslamicHoliday::EidAlAdha => (2023, 6, 28),
            IslamicHoliday::Mawlid => (2023, 9, 27),
        }
    }

    /// Estimated dates falling inside Ethiopian `year`, in order.
    ///
    /// A lunar year is shorter than the Ethiopian year, so there are one or
    /// two occurrences.
    pub fn estimate(&self, year: i32) -> Result<Vec<EthiopianDate>> {
        let new_year = EthiopianDate::new_year(year)?;
        let start = new_year.to_gregorian().serial() as i64;
        let end = start + ec_time::date::days_in_year(year) as i64;
        let (y, m, d) = self.anchor();
        let anchor = GregorianDate::new(y, m, d)?.serial() as i64;

        let first_k = ((start - anchor) * 30).div_euclid(DAYS_PER_30_YEARS) - 1;
        let mut dates = Vec::with_capacity(2);
        for k in first_k..first_k + 4 {
            let target = anchor + shift(k);
            if target >= end {
                break;
            }
            if target >= start {
                dates.push(new_year.add_days((target - start) as i32)?);
            }
        }
        trace!(holiday = self.key(), year, count = dates.len(), "estimated");
        Ok(dates)
    }

    /// Estimated occurrences in `year` as catalog entries.
    pub fn holidays_in_year(&self, year: i32, lang: Language) -> Result<Vec<Holiday>> {
        Ok(self
            .estimate(year)?
            .into_iter()
            .map(|ethiopian| Holiday {
                key: self.key(),
                tags: TAGS,
                name: self.name(lang),
                description: self.description(),
                ethiopian,
                gregorian: ethiopian.to_gregorian(),
                movable: true,
                duration_days: 1,
                accuracy: Accuracy::Estimated {
                    days: ESTIMATE_TOLERANCE_DAYS,
                },
            })
            .collect())
    }
}

/// `round(k × 10631 / 30)`, rounding halves up.
fn shift(k: i64) -> i64 {
    (2 * k * DAYS_PER_30_YEARS + 30).div_euclid(60)
}
