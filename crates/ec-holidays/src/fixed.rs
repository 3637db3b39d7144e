//! Fixed-date holidays.
//!
//! Each entry owns a static Ethiopian month and day and is instantiated
//! against a year at query time.  Gena is the one exception to "static": it
//! keeps Gregorian January 7, which is Tahsas 28 in the year after an
//! Ethiopian leap year and Tahsas 29 otherwise.

use crate::holiday::{Accuracy, Holiday, HolidayTag};
use ec_core::errors::Result;
use ec_core::Language;
use ec_time::EthiopianDate;

use HolidayTag::*;

/// A holiday observed on the same Ethiopian month/day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    /// Stable lowercase key.
    pub key: &'static str,
    /// Ethiopian month (1–13).
    pub month: u8,
    /// Ethiopian day of the month.
    pub day: u8,
    /// Observed one day earlier in the year following an Ethiopian leap year.
    pub early_after_leap_year: bool,
    /// Classification tags.
    pub tags: &'static [HolidayTag],
    /// Amharic name.
    pub name_am: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Short English description.
    pub description: &'static str,
}

const fn fixed(
    key: &'static str,
    month: u8,
    day: u8,
    tags: &'static [HolidayTag],
    name_am: &'static str,
    name_en: &'static str,
    description: &'static str,
) -> FixedHoliday {
    FixedHoliday {
        key,
        month,
        day,
        early_after_leap_year: false,
        tags,
        name_am,
        name_en,
        description,
    }
}

/// Every fixed-date holiday, ordered by month and day.
pub static FIXED_HOLIDAYS: &[FixedHoliday] = &[
    fixed(
        "enkutatash",
        1,
        1,
        &[Public, Cultural],
        "እንቁጣጣሽ",
        "Enkutatash (New Year)",
        "Ethiopian New Year, Meskerem 1",
    ),
    fixed(
        "demera",
        1,
        16,
        &[Religious, Christian, Cultural],
        "ደመራ",
        "Demera",
        "Bonfire on the eve of Meskel",
    ),
    fixed(
        "meskel",
        1,
        17,
        &[Public, Religious, Christian],
        "መስቀል",
        "Meskel",
        "Finding of the True Cross",
    ),
    fixed(
        "kulubi_gabriel",
        4,
        19,
        &[Religious, Christian],
        "ቁልቢ ገብርኤል",
        "Kulubi Gabriel",
        "Annual pilgrimage to the church of St. Gabriel at Kulubi",
    ),
    FixedHoliday {
        early_after_leap_year: true,
        ..fixed(
            "gena",
            4,
            29,
            &[Public, Religious, Christian],
            "ገና",
            "Gena (Christmas)",
            "Ethiopian Orthodox Christmas, Gregorian January 7",
        )
    },
    fixed(
        "ketera",
        5,
        10,
        &[Religious, Christian],
        "ከተራ",
        "Ketera",
        "Eve of Epiphany",
    ),
    fixed(
        "timket",
        5,
        11,
        &[Public, Religious, Christian],
        "ጥምቀት",
        "Timket (Epiphany)",
        "Baptism of Christ",
    ),
    fixed(
        "adwa",
        6,
        23,
        &[Public, State],
        "የዓድዋ ድል በዓል",
        "Adwa Victory Day",
        "Victory at the Battle of Adwa, 1896",
    ),
    fixed(
        "labour_day",
        8,
        23,
        &[Public, State],
        "የሠራተኞች ቀን",
        "International Labour Day",
        "Workers' day, Gregorian May 1",
    ),
    fixed(
        "patriots_victory",
        8,
        27,
        &[Public, State],
        "የአርበኞች ድል በዓል",
        "Patriots' Victory Day",
        "Liberation from the Italian occupation, 1941",
    ),
    fixed(
        "derg_downfall",
        9,
        20,
        &[Public, State],
        "ደርግ የወደቀበት ቀን",
        "Downfall of the Derg",
        "End of the Derg regime, 1991",
    ),
    fixed(
        "buhe",
        12,
        13,
        &[Religious, Christian, Cultural],
        "ቡሄ",
        "Buhe",
        "Feast of the Transfiguration",
    ),
];

impl FixedHoliday {
    /// Day of the month on which the holiday falls in `year`.
    pub fn day_in(&self, year: i32) -> u8 {
        if self.early_after_leap_year && ec_time::date::is_leap_year(year - 1) {
            self.day - 1
        } else {
            self.day
        }
    }

    /// Instantiate against `year`.
    pub fn resolve(&self, year: i32, lang: Language) -> Result<Holiday> {
        let ethiopian = EthiopianDate::new(year, self.month, self.day_in(year))?;
        Ok(Holiday {
            key: self.key,
            tags: self.tags,
            name: lang.pick(self.name_am, self.name_en),
            description: self.description,
            ethiopian,
            gregorian: ethiopian.to_gregorian(),
            movable: false,
            duration_days: 1,
            accuracy: Accuracy::Exact,
        })
    }
}

/// Fixed holidays whose static month is `month`.
pub fn fixed_in_month(month: u8) -> impl Iterator<Item = &'static FixedHoliday> {
    FIXED_HOLIDAYS.iter().filter(move |h| h.month == month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_time::GregorianDate;

    fn resolve(key: &str, year: i32) -> Holiday {
        FIXED_HOLIDAYS
            .iter()
            .find(|h| h.key == key)
            .unwrap()
            .resolve(year, Language::English)
            .unwrap()
    }

    #[test]
    fn table_is_sorted_and_keys_unique() {
        assert!(FIXED_HOLIDAYS
            .windows(2)
            .all(|w| (w[0].month, w[0].day) < (w[1].month, w[1].day)));
        let mut keys: Vec<&str> = FIXED_HOLIDAYS.iter().map(|h| h.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FIXED_HOLIDAYS.len());
    }

    #[test]
    fn gena_stays_on_january_7() {
        // Gregorian 1901–2100, where the Julian offset is 13 days.
        for year in 1893..=2092 {
            let gena = resolve("gena", year).gregorian;
            assert_eq!((gena.month(), gena.day()), (1, 7), "year {year}");
        }
        assert_eq!(resolve("gena", 2016).ethiopian.day(), 28);
        assert_eq!(resolve("gena", 2017).ethiopian.day(), 29);
    }

    #[test]
    fn state_holidays_in_gregorian_terms() {
        assert_eq!(resolve("adwa", 2016).gregorian, GregorianDate::new(2024, 3, 2).unwrap());
        assert_eq!(resolve("labour_day", 2016).gregorian, GregorianDate::new(2024, 5, 1).unwrap());
        assert_eq!(resolve("derg_downfall", 2016).gregorian, GregorianDate::new(2024, 5, 28).unwrap());
    }

    #[test]
    fn month_filter() {
        let keys: Vec<&str> = fixed_in_month(1).map(|h| h.key).collect();
        assert_eq!(keys, ["enkutatash", "demera", "meskel"]);
        assert_eq!(fixed_in_month(13).count(), 0);
    }
}
