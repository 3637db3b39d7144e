//! Data parsing helpers.
//!
//! Calendar operations only accept typed integers.  Text coming from users
//! (year fields, `YYYY-MM-DD` strings, Ge'ez numerals) is converted here, and
//! every failure is reported as an error.  Nothing is silently defaulted.
//!
//! Ge'ez numerals are only accepted by the functions that say so
//! ([`parse_geez_numeral`], [`parse_year_lenient`]); the plain parsers reject
//! them as [`Error::InvalidInputType`].

use crate::errors::{Error, Result};
use crate::{ensure_range, fail};

/// Parse a year written with ASCII digits (an optional leading `-` is allowed).
///
/// # Errors
/// [`Error::InvalidInputType`] if the text is not an integer.
pub fn parse_year(s: &str) -> Result<i32> {
    let t = s.trim();
    t.parse::<i32>()
        .map_err(|_| Error::InvalidInputType(format!("expected an integer year, got {s:?}")))
}

/// Parse a year written either with ASCII digits or with Ge'ez numerals.
///
/// This is the explicit opt-in for Ge'ez input; see [`parse_geez_numeral`].
pub fn parse_year_lenient(s: &str) -> Result<i32> {
    let t = s.trim();
    if t.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return parse_year(t);
    }
    let n = parse_geez_numeral(t)?;
    i32::try_from(n).map_err(|_| Error::InvalidRange {
        what: "year",
        value: n as i64,
        min: i32::MIN as i64,
        max: i32::MAX as i64,
    })
}

/// Parse a `YYYY-MM` (or `YYYY/MM`) string into `(year, month)`.
///
/// The month must be an Ethiopian month number (1–13).
pub fn parse_year_month(s: &str) -> Result<(i32, u8)> {
    let parts: Vec<&str> = s.trim().split(['-', '/']).collect();
    if parts.len() != 2 {
        fail!("expected YYYY-MM, got {s:?}");
    }
    let year = parse_year(parts[0])?;
    let month = parse_small(parts[1], "month")?;
    ensure_range!(month, 1, 13, "month");
    Ok((year, month))
}

/// Parse an Ethiopian date string into `(year, month, day)`.
///
/// Accepted shapes are ISO-like `YYYY-MM-DD` and `DD/MM/YYYY`.  Only the
/// coarse month (1–13) and day (1–30) bounds are checked here; the exact
/// month length is checked by the date constructor.
pub fn parse_ethiopian_ymd(s: &str) -> Result<(i32, u8, u8)> {
    let t = s.trim();
    let (year, month, day) = if t.contains('-') {
        let parts: Vec<&str> = t.split('-').collect();
        if parts.len() != 3 {
            fail!("expected YYYY-MM-DD, got {s:?}");
        }
        (
            parse_year(parts[0])?,
            parse_small(parts[1], "month")?,
            parse_small(parts[2], "day")?,
        )
    } else {
        let parts: Vec<&str> = t.split('/').collect();
        if parts.len() != 3 {
            fail!("expected YYYY-MM-DD or DD/MM/YYYY, got {s:?}");
        }
        (
            parse_year(parts[2])?,
            parse_small(parts[1], "month")?,
            parse_small(parts[0], "day")?,
        )
    };
    ensure_range!(month, 1, 13, "month");
    ensure_range!(day, 1, 30, "day");
    Ok((year, month, day))
}

/// Parse a number written in Ge'ez (Ethiopic) numerals.
///
/// Ge'ez has digits for 1–9 (`፩`–`፱`), tens 10–90 (`፲`–`፺`), a hundred
/// marker `፻` and a ten-thousand marker `፼`; there is no zero.  A marker
/// multiplies the group written before it (an empty group counts as one), so
/// `፳፻፲፮` is 20 × 100 + 16 = 2016 and `፻` alone is 100.
///
/// # Errors
/// * [`Error::InvalidInputType`] for characters that are not Ge'ez numerals.
/// * [`Error::Parse`] for empty input, a tens digit after a ones digit, a
///   repeated digit inside a group, or overflow.
pub fn parse_geez_numeral(s: &str) -> Result<u32> {
    let t = s.trim();
    if t.is_empty() {
        fail!("empty Ge'ez numeral");
    }
    let mut total: u32 = 0;
    let mut hundreds: u32 = 0;
    let mut small: u32 = 0;
    let mut has_tens = false;
    let mut has_ones = false;

    for c in t.chars() {
        match geez_value(c) {
            Some(GeezSymbol::Ones(v)) => {
                if has_ones {
                    fail!("repeated ones digit in {s:?}");
                }
                has_ones = true;
                small += v;
            }
            Some(GeezSymbol::Tens(v)) => {
                if has_tens || has_ones {
                    fail!("misplaced tens digit in {s:?}");
                }
                has_tens = true;
                small += v;
            }
            Some(GeezSymbol::Hundred) => {
                let group = if small == 0 { 1 } else { small };
                hundreds = group
                    .checked_mul(100)
                    .and_then(|g| hundreds.checked_add(g))
                    .ok_or_else(|| overflow(s))?;
                small = 0;
                has_tens = false;
                has_ones = false;
            }
            Some(GeezSymbol::TenThousand) => {
                let group = match hundreds + small {
                    0 => 1,
                    g => g,
                };
                total = group
                    .checked_mul(10_000)
                    .and_then(|g| total.checked_add(g))
                    .ok_or_else(|| overflow(s))?;
                hundreds = 0;
                small = 0;
                has_tens = false;
                has_ones = false;
            }
            None => {
                return Err(Error::InvalidInputType(format!(
                    "{c:?} is not a Ge'ez numeral (in {s:?})"
                )))
            }
        }
    }
    total
        .checked_add(hundreds + small)
        .ok_or_else(|| overflow(s))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

enum GeezSymbol {
    Ones(u32),
    Tens(u32),
    Hundred,
    TenThousand,
}

fn geez_value(c: char) -> Option<GeezSymbol> {
    match c as u32 {
        0x1369..=0x1371 => Some(GeezSymbol::Ones(c as u32 - 0x1368)),
        0x1372..=0x137A => Some(GeezSymbol::Tens((c as u32 - 0x1371) * 10)),
        0x137B => Some(GeezSymbol::Hundred),
        0x137C => Some(GeezSymbol::TenThousand),
        _ => None,
    }
}

fn overflow(s: &str) -> Error {
    Error::Parse(format!("Ge'ez numeral {s:?} overflows"))
}

fn parse_small(s: &str, what: &str) -> Result<u8> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| Error::InvalidInputType(format!("expected an integer {what}, got {s:?}")))
}
