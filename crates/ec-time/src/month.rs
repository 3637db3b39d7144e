//! `EthiopianMonth` — month-of-year enum for the Ethiopian calendar.

use ec_core::Language;

/// Month of the Ethiopian year.
///
/// Variants are numbered 1–13 (Meskerem = 1, Pagume = 13).  The first twelve
/// months have 30 days; Pagume has 5, or 6 in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1).
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miyazia (8).
    Miyazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13).
    Pagume = 13,
}

impl EthiopianMonth {
    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        use EthiopianMonth::*;
        const ALL: [EthiopianMonth; 13] = [
            Meskerem, Tikimt, Hidar, Tahsas, Tir, Yekatit, Megabit, Miyazia, Ginbot, Sene, Hamle,
            Nehase, Pagume,
        ];
        ALL.get((n as usize).wrapping_sub(1)).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the month name in the given language.
    pub fn name(&self, lang: Language) -> &'static str {
        let idx = self.number() as usize - 1;
        lang.pick(AMHARIC_NAMES[idx], ENGLISH_NAMES[idx])
    }
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

impl From<EthiopianMonth> for u8 {
    fn from(m: EthiopianMonth) -> u8 {
        m as u8
    }
}

const AMHARIC_NAMES: [&str; 13] = [
    "መስከረም", "ጥቅምት", "ኅዳር", "ታኅሣሥ", "ጥር", "የካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰኔ", "ሐምሌ",
    "ነሐሴ", "ጳጉሜን",
];

const ENGLISH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazia", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];
