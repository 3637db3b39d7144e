//! Bahire Hasab — the Ethiopian Orthodox computus.
//!
//! Every movable feast of a year follows from the year number alone:
//!
//! 1. `amete_alem = 5500 + year` (years since creation);
//!    `metene_rabiet = amete_alem / 4`.
//! 2. The evangelist of the year is `amete_alem % 4`
//!    (1 Matthew, 2 Mark, 3 Luke, 0 John).
//! 3. `medeb = amete_alem % 19`, `wenber = medeb - 1` (18 when `medeb` is 0).
//! 4. `abektie = wenber × 11 mod 30`; `metqi = wenber × 19 mod 30`, a zero
//!    metqi counting as 30.
//! 5. Beale Metqi falls on day `metqi` of Meskerem when `metqi > 14`, of
//!    Tikimt otherwise.  Its weekday selects the tewsak
//!    (Sun 7, Mon 6, Tue 5, Wed 4, Thu 3, Fri 2, Sat 8).
//! 6. `mebaja_hamer = metqi + tewsak`; past 30 it wraps and carries a month.
//!    The Fast of Nineveh starts on day `mebaja_hamer` of Tir (`metqi > 14`)
//!    or Yekatit, plus the carry.
//! 7. Every other movable feast is a fixed offset from Nineveh (see
//!    [`MovableFeast::offset_from_nineveh`]).
//!
//! The New Year weekday (Tinte Qemer) is `(amete_alem + metene_rabiet) % 7`
//! counted from Monday.

use std::collections::BTreeMap;

use crate::feast::MovableFeast;
use crate::holiday::{Accuracy, Holiday};
use ec_core::errors::Result;
use ec_core::{ensure_range, Language};
use ec_time::{EthiopianDate, Weekday};
use tracing::debug;

/// Years from creation to the Incarnation in the Ethiopian reckoning.
const AMETE_ALEM_OFFSET: i32 = 5500;

/// Hamle 5, feast of Peter and Paul; the Fast of the Apostles ends the day before.
const APOSTLES_FEAST: (u8, u8) = (11, 5);

/// The evangelist whose name the year bears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Evangelist {
    /// Remainder 1.
    Matthew,
    /// Remainder 2.
    Mark,
    /// Remainder 3.
    Luke,
    /// Remainder 0.
    John,
}

impl Evangelist {
    /// The evangelist for `amete_alem % 4`.
    pub fn from_remainder(remainder: u8) -> Self {
        match remainder % 4 {
            1 => Evangelist::Matthew,
            2 => Evangelist::Mark,
            3 => Evangelist::Luke,
            _ => Evangelist::John,
        }
    }

    /// Localised name.
    pub fn name(&self, lang: Language) -> &'static str {
        match self {
            Evangelist::Matthew => lang.pick("ማቴዎስ", "Matthew"),
            Evangelist::Mark => lang.pick("ማርቆስ", "Mark"),
            Evangelist::Luke => lang.pick("ሉቃስ", "Luke"),
            Evangelist::John => lang.pick("ዮሐንስ", "John"),
        }
    }
}

/// The full Bahire Hasab of one Ethiopian year.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BahireHasab {
    /// Ethiopian year (Amete Mihret).
    pub year: i32,
    /// Years since creation.
    pub amete_alem: i32,
    /// Number of completed four-year cycles since creation.
    pub metene_rabiet: i32,
    /// `amete_alem % 4`.
    pub evangelist_remainder: u8,
    /// Evangelist of the year.
    pub evangelist: Evangelist,
    /// Position in the 19-year lunar cycle.
    pub medeb: u8,
    /// `medeb - 1`, with 0 mapped to 18.
    pub wenber: u8,
    /// Epact.
    pub abektie: u8,
    /// Day of the month of Beale Metqi (1–30).
    pub metqi: u8,
    /// Beale Metqi, in Meskerem or Tikimt.
    pub beale_metqi: EthiopianDate,
    /// Weekday of Beale Metqi.
    pub beale_metqi_weekday: Weekday,
    /// Addend selected by the Beale Metqi weekday.
    pub tewsak: u8,
    /// Day of the month on which the Fast of Nineveh starts.
    pub mebaja_hamer: u8,
    /// Weekday of Meskerem 1.
    pub tinte_qemer: Weekday,
    /// First day of the Fast of Nineveh.
    pub nineveh: EthiopianDate,
    /// Every movable feast resolved for this year, localised.
    pub feasts: BTreeMap<MovableFeast, Holiday>,
}

impl BahireHasab {
    /// Compute the Bahire Hasab of `year` with names in `lang`.
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] if `year` is outside 1–9999.
    #[tracing::instrument(level = "debug", skip(lang))]
    pub fn compute(year: i32, lang: Language) -> Result<Self> {
        let c = Constants::new(year)?;
        debug!(
            amete_alem = c.amete_alem,
            medeb = c.medeb,
            wenber = c.wenber,
            metqi = c.metqi,
            tewsak = c.tewsak,
            nineveh = %c.nineveh,
            "bahire hasab constants"
        );

        let mut feasts = BTreeMap::new();
        for feast in MovableFeast::ALL {
            feasts.insert(feast, resolve(feast, c.nineveh, lang)?);
        }

        Ok(BahireHasab {
            year,
            amete_alem: c.amete_alem,
            metene_rabiet: c.metene_rabiet,
            evangelist_remainder: c.evangelist_remainder,
            evangelist: Evangelist::from_remainder(c.evangelist_remainder),
            medeb: c.medeb,
            wenber: c.wenber,
            abektie: c.abektie,
            metqi: c.metqi,
            beale_metqi: c.beale_metqi,
            beale_metqi_weekday: c.beale_metqi.weekday(),
            tewsak: c.tewsak,
            mebaja_hamer: c.mebaja_hamer,
            tinte_qemer: tinte_qemer(c.amete_alem, c.metene_rabiet),
            nineveh: c.nineveh,
            feasts,
        })
    }

    /// The resolved entry for `feast`.
    pub fn feast(&self, feast: MovableFeast) -> Option<&Holiday> {
        self.feasts.get(&feast)
    }

    /// Ethiopian date of `feast`.
    pub fn date_of(&self, feast: MovableFeast) -> Option<EthiopianDate> {
        self.feast(feast).map(|h| h.ethiopian)
    }

    /// Easter Sunday.
    pub fn fasika(&self) -> EthiopianDate {
        self.date_of(MovableFeast::Tinsaye).unwrap_or(self.nineveh)
    }
}

/// The intermediate constants, without the localised feast table.
struct Constants {
    amete_alem: i32,
    metene_rabiet: i32,
    evangelist_remainder: u8,
    medeb: u8,
    wenber: u8,
    abektie: u8,
    metqi: u8,
    beale_metqi: EthiopianDate,
    tewsak: u8,
    mebaja_hamer: u8,
    nineveh: EthiopianDate,
}

impl Constants {
    fn new(year: i32) -> Result<Self> {
        ensure_range!(year, EthiopianDate::MIN_YEAR, EthiopianDate::MAX_YEAR, "year");

        let amete_alem = AMETE_ALEM_OFFSET + year;
        let metene_rabiet = amete_alem / 4;
        let evangelist_remainder = (amete_alem % 4) as u8;
        let medeb = (amete_alem % 19) as u8;
        let wenber = if medeb == 0 { 18 } else { medeb - 1 };
        let abektie = (wenber as u16 * 11 % 30) as u8;
        let metqi = match (wenber as u16 * 19 % 30) as u8 {
            0 => 30,
            m => m,
        };

        let late = metqi > 14;
        let beale_metqi = EthiopianDate::new(year, if late { 1 } else { 2 }, metqi)?;
        let tewsak = tewsak(beale_metqi.weekday());

        let mut mebaja_hamer = metqi + tewsak;
        let mut nineveh_month = if late { 5 } else { 6 };
        if mebaja_hamer > 30 {
            mebaja_hamer -= 30;
            nineveh_month += 1;
        }
        let nineveh = EthiopianDate::new(year, nineveh_month, mebaja_hamer)?;

        Ok(Constants {
            amete_alem,
            metene_rabiet,
            evangelist_remainder,
            medeb,
            wenber,
            abektie,
            metqi,
            beale_metqi,
            tewsak,
            mebaja_hamer,
            nineveh,
        })
    }
}

/// Addend for the weekday of Beale Metqi.
pub fn tewsak(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sunday => 7,
        Weekday::Monday => 6,
        Weekday::Tuesday => 5,
        Weekday::Wednesday => 4,
        Weekday::Thursday => 3,
        Weekday::Friday => 2,
        Weekday::Saturday => 8,
    }
}

fn tinte_qemer(amete_alem: i32, metene_rabiet: i32) -> Weekday {
    // 0 = Monday; `from_ordinal` counts Monday as 1.
    let index = ((amete_alem + metene_rabiet) % 7) as u8;
    Weekday::from_ordinal(index + 1).unwrap_or(Weekday::Monday)
}

fn resolve(feast: MovableFeast, nineveh: EthiopianDate, lang: Language) -> Result<Holiday> {
    let ethiopian = nineveh.add_days(feast.offset_from_nineveh())?;
    let duration_days = match feast.fixed_duration() {
        Some(days) => days,
        None => {
            let (month, day) = APOSTLES_FEAST;
            let end = EthiopianDate::new(ethiopian.year(), month, day)?;
            end.diff_in_days(&ethiopian).max(1) as u16
        }
    };
    Ok(Holiday {
        key: feast.key(),
        tags: feast.tags(),
        name: feast.name(lang),
        description: feast.description(),
        ethiopian,
        gregorian: ethiopian.to_gregorian(),
        movable: true,
        duration_days,
        accuracy: Accuracy::Exact,
    })
}

/// Compute the Bahire Hasab of `year`.
///
/// See [`BahireHasab::compute`].
pub fn get_bahire_hasab(year: i32, lang: Language) -> Result<BahireHasab> {
    BahireHasab::compute(year, lang)
}

/// Ethiopian date of the movable feast named `key` in `year`.
///
/// Keys are case-insensitive; `fasika` and `easter` are accepted for
/// `tinsaye`.
///
/// # Errors
/// * [`ec_core::Error::UnknownHoliday`] for an unregistered key.
/// * [`ec_core::Error::InvalidRange`] if `year` is outside 1–9999.
pub fn get_movable_holiday(key: &str, year: i32) -> Result<EthiopianDate> {
    let feast: MovableFeast = key.parse()?;
    let nineveh = Constants::new(year)?.nineveh;
    nineveh.add_days(feast.offset_from_nineveh())
}
