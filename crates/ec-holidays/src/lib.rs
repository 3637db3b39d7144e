//! # ec-holidays
//!
//! The Bahire Hasab (Ethiopian Orthodox computus) and the Ethiopian holiday
//! catalog built on top of it.
//!
//! ```
//! use ec_core::Language;
//! use ec_holidays::{get_bahire_hasab, holidays_in_month, HolidayOptions, MovableFeast};
//!
//! let bh = get_bahire_hasab(2016, Language::English)?;
//! assert_eq!(bh.date_of(MovableFeast::Tinsaye).map(|d| d.to_string()),
//!            Some("27 Miyazia 2016".to_string()));
//!
//! let meskerem = holidays_in_month(2016, 1, &HolidayOptions::default())?;
//! assert!(meskerem.iter().any(|h| h.key == "meskel"));
//! # Ok::<(), ec_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bahire Hasab constants and movable-feast dates.
pub mod bahire_hasab;

/// `HolidayCatalog`, holiday sources, and query options.
pub mod catalog;

/// `MovableFeast` — keys, offsets, and names of the movable feasts.
pub mod feast;

/// The fixed-date holiday table.
pub mod fixed;

/// Estimated Islamic holidays.
pub mod hijri;

/// `Holiday`, `HolidayTag`, and `Accuracy`.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bahire_hasab::{get_bahire_hasab, get_movable_holiday, BahireHasab, Evangelist};
pub use catalog::{
    holidays_in_month, holidays_in_year, FixedHolidays, HolidayCatalog, HolidayOptions,
    HolidaySource, IslamicEstimates, MovableFeasts,
};
pub use feast::MovableFeast;
pub use fixed::{FixedHoliday, FIXED_HOLIDAYS};
pub use hijri::IslamicHoliday;
pub use holiday::{Accuracy, Holiday, HolidayTag};
