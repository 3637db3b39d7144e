//! Language selection for localised names.
//!
//! The calendar core is language-agnostic; the only configuration it accepts
//! is which of the two supported name tables to read from when it attaches
//! human-readable names to months, weekdays, and holidays.

use std::str::FromStr;

use crate::errors::Error;

/// Language used for month, weekday, and holiday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Amharic, written in Ethiopic script.
    #[default]
    Amharic,
    /// English (transliterated Ethiopian names).
    English,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Amharic, Language::English];

    /// The configuration string for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Amharic => "amharic",
            Language::English => "english",
        }
    }

    /// Pick the entry for this language out of an `(amharic, english)` pair.
    pub fn pick<T>(&self, amharic: T, english: T) -> T {
        match self {
            Language::Amharic => amharic,
            Language::English => english,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amharic" | "am" => Ok(Language::Amharic),
            "english" | "en" => Ok(Language::English),
            other => Err(Error::InvalidInputType(format!(
                "unsupported language {other:?} (expected \"amharic\" or \"english\")"
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
