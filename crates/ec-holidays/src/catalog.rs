//! Holiday catalog — merges holiday sources into per-month and per-year lists.
//!
//! A [`HolidaySource`] produces the holidays of one kind for a year.  The
//! standard catalog joins three of them:
//!
//! * [`FixedHolidays`]: the static month/day table,
//! * [`MovableFeasts`]: the Bahire Hasab feasts of the year,
//! * [`IslamicEstimates`]: estimated Islamic holidays (`Accuracy::Estimated`).
//!
//! Results are sorted by date, ties broken by key.

use std::sync::OnceLock;

use crate::bahire_hasab::BahireHasab;
use crate::fixed::fixed_in_month;
use crate::hijri::IslamicHoliday;
use crate::holiday::{Holiday, HolidayTag};
use ec_core::errors::Result;
use ec_core::{ensure_range, Language};
use ec_time::EthiopianDate;
use tracing::trace;

// ── Options ───────────────────────────────────────────────────────────────────

/// Query options for the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HolidayOptions {
    /// Language of the returned names.
    pub lang: Language,
    /// Keep holidays carrying any of these tags; empty keeps everything.
    pub tags: Vec<HolidayTag>,
    /// Include estimated (Islamic) holidays.
    pub include_estimated: bool,
}

impl Default for HolidayOptions {
    fn default() -> Self {
        HolidayOptions {
            lang: Language::default(),
            tags: Vec::new(),
            include_estimated: true,
        }
    }
}

impl HolidayOptions {
    /// Names in `lang`.
    pub fn with_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    /// Add `tag` to the filter.
    pub fn with_tag(mut self, tag: HolidayTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Replace the tag filter.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = HolidayTag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Include or drop estimated holidays.
    pub fn with_estimated(mut self, include: bool) -> Self {
        self.include_estimated = include;
        self
    }

    fn keeps(&self, holiday: &Holiday) -> bool {
        holiday.matches_any(&self.tags) && (self.include_estimated || !holiday.is_estimated())
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

/// A producer of holidays for a given Ethiopian year.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the source.
    fn name(&self) -> &str;

    /// All holidays of `year`.
    fn holidays_in_year(&self, year: i32, lang: Language) -> Result<Vec<Holiday>>;

    /// Holidays of `year` whose (first) day lies in `month`.
    fn holidays_in_month(&self, year: i32, month: u8, lang: Language) -> Result<Vec<Holiday>> {
        let mut all = self.holidays_in_year(year, lang)?;
        all.retain(|h| h.ethiopian.month() == month);
        Ok(all)
    }
}

/// The fixed-date holiday table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHolidays;

impl HolidaySource for FixedHolidays {
    fn name(&self) -> &str {
        "fixed"
    }

    fn holidays_in_year(&self, year: i32, lang: Language) -> Result<Vec<Holiday>> {
        (1..=13)
            .flat_map(fixed_in_month)
            .map(|h| h.resolve(year, lang))
            .collect()
    }

    fn holidays_in_month(&self, year: i32, month: u8, lang: Language) -> Result<Vec<Holiday>> {
        fixed_in_month(month).map(|h| h.resolve(year, lang)).collect()
    }
}

/// The movable feasts computed by the Bahire Hasab.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovableFeasts;

impl HolidaySource for MovableFeasts {
    fn name(&self) -> &str {
        "bahire hasab"
    }

    fn holidays_in_year(&self, year: i32, lang: Language) -> Result<Vec<Holiday>> {
        Ok(BahireHasab::compute(year, lang)?.feasts.into_values().collect())
    }
}

/// Estimated Islamic holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct IslamicEstimates;

impl HolidaySource for IslamicEstimates {
    fn name(&self) -> &str {
        "islamic (estimated)"
    }

    fn holidays_in_year(&self, year: i32, lang: Language) -> Result<Vec<Holiday>> {
        let mut out = Vec::new();
        for holiday in IslamicHoliday::ALL {
            out.extend(holiday.holidays_in_year(year, lang)?);
        }
        Ok(out)
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// A set of holiday sources queried together.
pub struct HolidayCatalog {
    sources: Vec<Box<dyn HolidaySource>>,
}

impl std::fmt::Debug for HolidayCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("HolidayCatalog").field("sources", &names).finish()
    }
}

impl Default for HolidayCatalog {
    fn default() -> Self {
        HolidayCatalog::new(vec![
            Box::new(FixedHolidays),
            Box::new(MovableFeasts),
            Box::new(IslamicEstimates),
        ])
    }
}

impl HolidayCatalog {
    /// Create a catalog from explicit sources.
    pub fn new(sources: Vec<Box<dyn HolidaySource>>) -> Self {
        HolidayCatalog { sources }
    }

    /// The shared catalog of fixed, movable, and estimated Islamic holidays.
    pub fn standard() -> &'static HolidayCatalog {
        static STANDARD: OnceLock<HolidayCatalog> = OnceLock::new();
        STANDARD.get_or_init(HolidayCatalog::default)
    }

    /// Add another source.
    pub fn with_source(mut self, source: Box<dyn HolidaySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Holidays of `month` in `year`, sorted by day then key.
    ///
    /// # Errors
    /// [`ec_core::Error::InvalidRange`] if `year` is outside 1–9999 or
    /// `month` outside 1–13.
    #[tracing::instrument(level = "debug", skip(self, options), fields(lang = %options.lang))]
    pub fn holidays_in_month(
        &self,
        year: i32,
        month: u8,
        options: &HolidayOptions,
    ) -> Result<Vec<Holiday>> {
        ensure_range!(year, EthiopianDate::MIN_YEAR, EthiopianDate::MAX_YEAR, "year");
        ensure_range!(month, 1, 13, "month");

        let mut out = Vec::new();
        for source in &self.sources {
            let found = source.holidays_in_month(year, month, options.lang)?;
            trace!(source = source.name(), count = found.len(), "merged");
            out.extend(found.into_iter().filter(|h| options.keeps(h)));
        }
        sort(&mut out);
        Ok(out)
    }

    /// Every holiday of `year` in chronological order.
    #[tracing::instrument(level = "debug", skip(self, options), fields(lang = %options.lang))]
    pub fn holidays_in_year(&self, year: i32, options: &HolidayOptions) -> Result<Vec<Holiday>> {
        ensure_range!(year, EthiopianDate::MIN_YEAR, EthiopianDate::MAX_YEAR, "year");

        let mut out = Vec::new();
        for source in &self.sources {
            let found = source.holidays_in_year(year, options.lang)?;
            trace!(source = source.name(), count = found.len(), "merged");
            out.extend(found.into_iter().filter(|h| options.keeps(h)));
        }
        sort(&mut out);
        Ok(out)
    }
}

fn sort(holidays: &mut [Holiday]) {
    holidays.sort_by(|a, b| (a.ethiopian, a.key).cmp(&(b.ethiopian, b.key)));
}

// ── Free-function API ─────────────────────────────────────────────────────────

/// Holidays of `month` in `year` from the standard catalog.
pub fn holidays_in_month(year: i32, month: u8, options: &HolidayOptions) -> Result<Vec<Holiday>> {
    HolidayCatalog::standard().holidays_in_month(year, month, options)
}

/// Every holiday of `year` from the standard catalog.
pub fn holidays_in_year(year: i32, options: &HolidayOptions) -> Result<Vec<Holiday>> {
    HolidayCatalog::standard().holidays_in_year(year, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(holidays: &[Holiday]) -> Vec<&'static str> {
        holidays.iter().map(|h| h.key).collect()
    }

    #[test]
    fn options_builders() {
        let options = HolidayOptions::default()
            .with_language(Language::English)
            .with_tag(HolidayTag::Christian)
            .with_tag(HolidayTag::Christian)
            .with_estimated(false);
        assert_eq!(options.lang, Language::English);
        assert_eq!(options.tags, [HolidayTag::Christian]);
        assert!(!options.include_estimated);
        assert_eq!(HolidayOptions::default().lang, Language::Amharic);
    }

    #[test]
    fn meskerem_2016() {
        let found = holidays_in_month(2016, 1, &HolidayOptions::default()).unwrap();
        // Mawlid (estimated) shares Meskerem 16 with Demera; ties sort by key.
        assert_eq!(keys(&found), ["enkutatash", "demera", "mawlid", "meskel"]);
        assert!(found.iter().all(|h| h.ethiopian.month() == 1));
    }

    #[test]
    fn estimated_entries_can_be_dropped() {
        let options = HolidayOptions::default().with_estimated(false);
        let found = holidays_in_month(2016, 1, &options).unwrap();
        assert_eq!(keys(&found), ["enkutatash", "demera", "meskel"]);
    }

    #[test]
    fn custom_catalog() {
        let catalog = HolidayCatalog::new(vec![Box::new(MovableFeasts)]);
        let found = catalog
            .holidays_in_month(2016, 8, &HolidayOptions::default())
            .unwrap();
        assert_eq!(keys(&found), ["hosanna", "siklet", "tinsaye"]);
        assert_eq!(
            format!("{catalog:?}"),
            "HolidayCatalog { sources: [\"bahire hasab\"] }"
        );
    }

    #[test]
    fn validation() {
        let options = HolidayOptions::default();
        assert!(holidays_in_month(2016, 14, &options).unwrap_err().is_range());
        assert!(holidays_in_month(2016, 0, &options).unwrap_err().is_range());
        assert!(holidays_in_month(0, 1, &options).unwrap_err().is_range());
        assert!(holidays_in_year(10_000, &options).unwrap_err().is_range());
    }
}
