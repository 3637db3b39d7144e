//! `MovableFeast` — the feasts and fasts placed by the Bahire Hasab.
//!
//! Every movable observance sits a fixed number of days after the start of
//! the Fast of Nineveh.  The offsets are traditional constants, not derived.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::holiday::HolidayTag;
use ec_core::errors::{Error, Result};
use ec_core::Language;

/// A movable feast or fast.
///
/// Variants are declared in calendar order, so the derived `Ord` sorts them
/// chronologically within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovableFeast {
    /// Fast of Nineveh (Tsome Nenewe), three days.
    Nineveh,
    /// Start of the Great Lent (Abiy Tsome / Hudadi).
    AbiyTsome,
    /// Debre Zeit, mid-Lent Sunday.
    DebreZeit,
    /// Hosanna (Palm Sunday).
    Hosanna,
    /// Siklet (Good Friday).
    Siklet,
    /// Tinsaye / Fasika (Easter).
    Tinsaye,
    /// Rikbe Kahnat, the meeting of the priests.
    RikbeKahnat,
    /// Erget (Ascension).
    Erget,
    /// Paraclete (Pentecost).
    Paraclete,
    /// Start of the Fast of the Apostles.
    TsomeHawaryat,
    /// Resumption of the Wednesday/Friday Fast of Salvation.
    TsomeDihnet,
}

const CHRISTIAN: &[HolidayTag] = &[HolidayTag::Religious, HolidayTag::Christian];
const CHRISTIAN_PUBLIC: &[HolidayTag] = &[
    HolidayTag::Public,
    HolidayTag::Religious,
    HolidayTag::Christian,
];

impl MovableFeast {
    /// All movable feasts, in calendar order.
    pub const ALL: [MovableFeast; 11] = [
        MovableFeast::Nineveh,
        MovableFeast::AbiyTsome,
        MovableFeast::DebreZeit,
        MovableFeast::Hosanna,
        MovableFeast::Siklet,
        MovableFeast::Tinsaye,
        MovableFeast::RikbeKahnat,
        MovableFeast::Erget,
        MovableFeast::Paraclete,
        MovableFeast::TsomeHawaryat,
        MovableFeast::TsomeDihnet,
    ];

    /// Stable lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            MovableFeast::Nineveh => "nineveh",
            MovableFeast::AbiyTsome => "abiy_tsome",
            MovableFeast::DebreZeit => "debre_zeit",
            MovableFeast::Hosanna => "hosanna",
            MovableFeast::Siklet => "siklet",
            MovableFeast::Tinsaye => "tinsaye",
            MovableFeast::RikbeKahnat => "rikbe_kahnat",
            MovableFeast::Erget => "erget",
            MovableFeast::Paraclete => "paraclete",
            MovableFeast::TsomeHawaryat => "tsome_hawaryat",
            MovableFeast::TsomeDihnet => "tsome_dihnet",
        }
    }

    /// Days after the first day of the Fast of Nineveh.
    pub fn offset_from_nineveh(&self) -> i32 {
        match self {
            MovableFeast::Nineveh => 0,
            MovableFeast::AbiyTsome => 14,
            MovableFeast::DebreZeit => 41,
            MovableFeast::Hosanna => 62,
            MovableFeast::Siklet => 67,
            MovableFeast::Tinsaye => 69,
            MovableFeast::RikbeKahnat => 93,
            MovableFeast::Erget => 108,
            MovableFeast::Paraclete => 118,
            MovableFeast::TsomeHawaryat => 119,
            MovableFeast::TsomeDihnet => 121,
        }
    }

    /// Length of the observance in days, where it does not depend on the year.
    ///
    /// The Fast of the Apostles ends on a fixed date (Hamle 4), so its length
    /// varies and is resolved by the engine.
    pub fn fixed_duration(&self) -> Option<u16> {
        match self {
            MovableFeast::Nineveh => Some(3),
            MovableFeast::AbiyTsome => Some(55),
            MovableFeast::TsomeHawaryat => None,
            _ => Some(1),
        }
    }

    /// Classification tags.
    pub fn tags(&self) -> &'static [HolidayTag] {
        match self {
            MovableFeast::Siklet | MovableFeast::Tinsaye => CHRISTIAN_PUBLIC,
            _ => CHRISTIAN,
        }
    }

    /// Localised name.
    pub fn name(&self, lang: Language) -> &'static str {
        match self {
            MovableFeast::Nineveh => lang.pick("ጾመ ነነዌ", "Fast of Nineveh"),
            MovableFeast::AbiyTsome => lang.pick("ዐቢይ ጾም", "Abiy Tsome (Great Lent)"),
            MovableFeast::DebreZeit => lang.pick("ደብረ ዘይት", "Debre Zeit"),
            MovableFeast::Hosanna => lang.pick("ሆሣዕና", "Hosanna"),
            MovableFeast::Siklet => lang.pick("ስቅለት", "Siklet (Good Friday)"),
            MovableFeast::Tinsaye => lang.pick("ትንሣኤ", "Fasika (Easter)"),
            MovableFeast::RikbeKahnat => lang.pick("ርክበ ካህናት", "Rikbe Kahnat"),
            MovableFeast::Erget => lang.pick("ዕርገት", "Erget (Ascension)"),
            MovableFeast::Paraclete => lang.pick("ጰራቅሊጦስ", "Paraclete (Pentecost)"),
            MovableFeast::TsomeHawaryat => lang.pick("ጾመ ሐዋርያት", "Fast of the Apostles"),
            MovableFeast::TsomeDihnet => lang.pick("ጾመ ድኅነት", "Fast of Salvation"),
        }
    }

    /// Short English description.
    pub fn description(&self) -> &'static str {
        match self {
            MovableFeast::Nineveh => "Three-day fast commemorating the repentance of Nineveh",
            MovableFeast::AbiyTsome => "Beginning of the 55-day Great Lent before Easter",
            MovableFeast::DebreZeit => "Mid-Lent Sunday recalling the Sermon on the Mount of Olives",
            MovableFeast::Hosanna => "Palm Sunday, the entry into Jerusalem",
            MovableFeast::Siklet => "Good Friday, the Crucifixion",
            MovableFeast::Tinsaye => "Ethiopian Orthodox Easter, the Resurrection",
            MovableFeast::RikbeKahnat => "Meeting of the priests, 24 days after Easter",
            MovableFeast::Erget => "Ascension, 39 days after Easter",
            MovableFeast::Paraclete => "Pentecost, 49 days after Easter",
            MovableFeast::TsomeHawaryat => "Fast of the Apostles, ending before the feast of Peter and Paul",
            MovableFeast::TsomeDihnet => "Wednesday and Friday fasting resumes after Pentecost",
        }
    }
}

impl std::fmt::Display for MovableFeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Lookup table from lowercase key (and alias) to feast.
fn index() -> &'static HashMap<&'static str, MovableFeast> {
    static INDEX: OnceLock<HashMap<&'static str, MovableFeast>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map: HashMap<&'static str, MovableFeast> =
            MovableFeast::ALL.iter().map(|f| (f.key(), *f)).collect();
        for (alias, feast) in [
            ("fasika", MovableFeast::Tinsaye),
            ("easter", MovableFeast::Tinsaye),
            ("good_friday", MovableFeast::Siklet),
            ("hudadi", MovableFeast::AbiyTsome),
            ("ascension", MovableFeast::Erget),
            ("pentecost", MovableFeast::Paraclete),
        ] {
            map.insert(alias, feast);
        }
        map
    })
}

impl FromStr for MovableFeast {
    type Err = Error;

    /// Case-insensitive; spaces and hyphens are read as underscores.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        index()
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::UnknownHoliday(s.to_string()))
    }
}
