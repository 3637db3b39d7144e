//! Façade API tests: the flat function surface and its validation.

use ethiocal::parse::{parse_ethiopian_ymd, parse_year, parse_year_month};
use ethiocal::{
    add_days, add_months, add_years, days_in_ethiopian_month, diff_in_days, diff_in_months,
    diff_in_years, ethiopian_to_gregorian, get_bahire_hasab, get_holidays_in_month,
    get_movable_holiday, gregorian_to_ethiopian, holidays_in_year, is_ethiopian_leap_year, Error,
    EthiopianDate, GregorianDate, HolidayOptions, Language, MovableFeast,
};
use proptest::prelude::*;

fn e(y: i32, m: u8, d: u8) -> EthiopianDate {
    EthiopianDate::new(y, m, d).unwrap()
}

// ─── Conversions ──────────────────────────────────────────────────────────────

#[test]
fn known_conversions() {
    let eth = gregorian_to_ethiopian(2025, 5, 22).unwrap();
    assert_eq!(eth, e(2017, 9, 14));

    let greg = ethiopian_to_gregorian(2016, 13, 5).unwrap();
    assert_eq!(greg, GregorianDate::new(2024, 9, 10).unwrap());

    // Meskerem 1 2012 fell on 2019-09-12, so the leap day is the 171st day.
    let leap_day = gregorian_to_ethiopian(2020, 2, 29).unwrap();
    assert_eq!(leap_day, e(2012, 6, 21));
    assert_eq!(leap_day.day_of_year(), 171);

    assert_eq!(
        gregorian_to_ethiopian(2024, 1, 7).unwrap().to_string(),
        "28 Tahsas 2016"
    );
}

#[test]
fn conversion_errors() {
    assert!(ethiopian_to_gregorian(2016, 13, 6).unwrap_err().is_range());
    assert!(ethiopian_to_gregorian(2016, 1, 31).unwrap_err().is_range());
    assert!(gregorian_to_ethiopian(2024, 13, 1).unwrap_err().is_range());
    assert!(gregorian_to_ethiopian(1900, 2, 29).unwrap_err().is_range());
}

// ─── Calendar rules ───────────────────────────────────────────────────────────

#[test]
fn leap_years_and_month_lengths() {
    for year in 1..=3000 {
        let pagume = days_in_ethiopian_month(year, 13).unwrap();
        assert_eq!(pagume == 6, is_ethiopian_leap_year(year), "year {year}");
        assert_eq!(is_ethiopian_leap_year(year), year % 4 == 3);
    }
    assert!(matches!(
        days_in_ethiopian_month(2016, 14),
        Err(Error::InvalidRange { what: "month", .. })
    ));
}

// ─── Arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn pagume_clamp() {
    let start = e(2011, 13, 6);
    assert_eq!(add_years(start, 1).unwrap(), e(2012, 13, 5));
    assert_eq!(add_years(start, 4).unwrap(), e(2015, 13, 6));
    assert_eq!(add_months(e(2016, 12, 30), 1).unwrap(), e(2016, 13, 5));
}

#[test]
fn differences() {
    let a = e(2016, 1, 1);
    let b = e(2017, 3, 15);
    assert_eq!(diff_in_years(&b, &a), 1);
    assert_eq!(diff_in_months(&b, &a), 15);
    assert_eq!(diff_in_days(&b, &a), 365 + 74);
    assert_eq!(diff_in_days(&a, &b), -(365 + 74));
}

// ─── Bahire Hasab and holidays ────────────────────────────────────────────────

#[test]
fn movable_feasts_2016() {
    assert_eq!(get_movable_holiday("TINSAYE", 2016).unwrap(), e(2016, 8, 27));
    assert_eq!(get_movable_holiday("SIKLET", 2016).unwrap(), e(2016, 8, 25));

    let bh = get_bahire_hasab(2016, Language::English).unwrap();
    let nineveh = bh.feast(MovableFeast::Nineveh).unwrap();
    assert_eq!(nineveh.ethiopian, e(2016, 6, 18));
    assert_eq!(nineveh.duration_days, 3);
    assert_eq!(nineveh.name, "Fast of Nineveh");

    assert!(matches!(
        get_movable_holiday("christmas", 2016),
        Err(Error::UnknownHoliday(key)) if key == "christmas"
    ));
}

#[test]
fn holidays_of_meskerem() {
    let found = get_holidays_in_month(2016, 1, &HolidayOptions::default()).unwrap();
    let day_of = |key: &str| found.iter().find(|h| h.key == key).map(|h| h.ethiopian.day());
    assert_eq!(day_of("enkutatash"), Some(1));
    assert_eq!(day_of("meskel"), Some(17));
    assert!(found.iter().all(|h| h.ethiopian.month() == 1));

    let year = holidays_in_year(2016, &HolidayOptions::default()).unwrap();
    assert!(year.iter().any(|h| h.key == "timket"));
}

// ─── Textual input ────────────────────────────────────────────────────────────

#[test]
fn text_is_parsed_before_calendar_code() {
    assert!(matches!(parse_year("2016a"), Err(Error::InvalidInputType(_))));
    assert!(matches!(parse_year("፳፻፲፮"), Err(Error::InvalidInputType(_))));

    let (year, month) = parse_year_month("2016-08").unwrap();
    let found = get_holidays_in_month(year, month, &HolidayOptions::default()).unwrap();
    assert!(found.iter().any(|h| h.key == "tinsaye"));

    let (y, m, d) = parse_ethiopian_ymd("05/13/2016").unwrap();
    assert_eq!(ethiopian_to_gregorian(y, m, d).unwrap().to_string(), "2024-09-10");
}

#[test]
fn language_configuration() {
    assert_eq!("english".parse::<Language>().unwrap(), Language::English);
    assert_eq!("amharic".parse::<Language>().unwrap(), Language::Amharic);
    assert!("oromo".parse::<Language>().is_err());
    assert_eq!(Language::default(), Language::Amharic);
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_round_trip(year in 1..=3000i32, doy in 1..=366u16) {
        let len = ethiocal::time::date::days_in_year(year);
        let doy = (doy - 1) % len + 1;
        let month = ((doy - 1) / 30 + 1) as u8;
        let day = ((doy - 1) % 30 + 1) as u8;
        let greg = ethiopian_to_gregorian(year, month, day).unwrap();
        let back = gregorian_to_ethiopian(greg.year(), greg.month(), greg.day()).unwrap();
        prop_assert_eq!(back, e(year, month, day));
    }

    #[test]
    fn prop_add_days_inverse(year in 1..=3000i32, month in 1..=12u8, day in 1..=30u8, n in -100_000..=100_000i32) {
        let d = e(year, month, day);
        if let Ok(moved) = add_days(d, n) {
            prop_assert_eq!(add_days(moved, -n).unwrap(), d);
            prop_assert_eq!(diff_in_days(&moved, &d), n);
        }
    }
}
