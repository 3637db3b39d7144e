//! Miscellaneous utilities.

/// Explicit text-to-integer parsers for years, months, and dates.
pub mod data_parsers;

pub use data_parsers::{
    parse_ethiopian_ymd, parse_geez_numeral, parse_year, parse_year_lenient, parse_year_month,
};
