//! Conversion tests.
//!
//! These integration tests exercise `converter`, the Ethiopian calendar rules,
//! and the Gregorian day counter together.

use ec_time::date::{days_in_month, is_leap_year};
use ec_time::gregorian;
use ec_time::{
    ethiopian_to_gregorian, gregorian_to_ethiopian, new_year, EthiopianDate, GregorianDate,
    Weekday,
};
use proptest::prelude::*;

fn e(y: i32, m: u8, d: u8) -> EthiopianDate {
    EthiopianDate::new(y, m, d).unwrap()
}

fn g(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

// ─── Known dates ──────────────────────────────────────────────────────────────

#[test]
fn known_conversions() {
    assert_eq!(gregorian_to_ethiopian(2025, 5, 22), e(2017, 9, 14));
    assert_eq!(ethiopian_to_gregorian(2016, 13, 5), g(2024, 9, 10));
    assert_eq!(gregorian_to_ethiopian(2020, 2, 29), e(2012, 6, 21));
    // Adwa Victory Day, Yekatit 23, is March 2 whether or not February has 29 days.
    assert_eq!(ethiopian_to_gregorian(2012, 6, 23), g(2020, 3, 2));
    assert_eq!(ethiopian_to_gregorian(2015, 6, 23), g(2023, 3, 2));
    // Meskel, Meskerem 17.
    assert_eq!(ethiopian_to_gregorian(2016, 1, 17), g(2023, 9, 28));
    assert_eq!(ethiopian_to_gregorian(2017, 1, 17), g(2024, 9, 27));
}

#[test]
fn last_supported_day_converts_both_ways() {
    let last = e(9999, 13, 6);
    let greg = last.to_gregorian();
    assert_eq!(greg, g(10_007, 11, 10));
    assert_eq!(greg.to_ethiopian().unwrap(), last);
    assert_eq!(greg.add_days(-1).unwrap(), g(10_007, 11, 9));
    assert!(greg.add_days(1).unwrap().to_ethiopian().unwrap_err().is_range());
    for day in 1..=6 {
        let greg = ethiopian_to_gregorian(9999, 13, day);
        assert_eq!(GregorianDate::from_serial(greg.serial()).unwrap(), greg);
    }
}

// ─── Consistency over the whole supported range ───────────────────────────────

#[test]
fn ethiopian_roundtrip_years_1_to_3000() {
    for year in 1..=3000 {
        for month in 1..=13u8 {
            for day in 1..=days_in_month(year, month) {
                let greg = ethiopian_to_gregorian(year, month, day);
                let back = gregorian_to_ethiopian(greg.year(), greg.month(), greg.day());
                assert_eq!(back, e(year, month, day), "via {greg}");
            }
        }
    }
}

#[test]
fn gregorian_roundtrip_and_consistency() {
    // Walk every Gregorian day from Meskerem 1 of year 1 to the end of
    // Ethiopian year 3000, checking that the Ethiopian side advances by
    // exactly one day each time.
    let first = new_year(1);
    let last = ethiopian_to_gregorian(3000, 13, 5);
    let mut prev = gregorian_to_ethiopian(first.year(), first.month(), first.day());
    assert_eq!(prev, e(1, 1, 1));

    for serial in first.serial() + 1..=last.serial() {
        let greg = GregorianDate::from_serial(serial).unwrap();
        let eth = gregorian_to_ethiopian(greg.year(), greg.month(), greg.day());
        assert_eq!(
            ethiopian_to_gregorian(eth.year(), eth.month(), eth.day()),
            greg,
            "roundtrip failed for {greg}"
        );
        let (d_old, m_old, y_old) = (prev.day(), prev.month(), prev.year());
        assert!(
            (eth.day() == d_old + 1 && eth.month() == m_old && eth.year() == y_old)
                || (eth.day() == 1 && eth.month() == m_old + 1 && eth.year() == y_old)
                || (eth.day() == 1 && eth.month() == 1 && eth.year() == y_old + 1),
            "wrong increment: {eth:?} after {prev:?}"
        );
        assert!(eth.day() <= days_in_month(eth.year(), eth.month()));
        prev = eth;
    }
}

#[test]
fn new_year_falls_on_september_11_or_12() {
    // Gregorian 1900–2098, where both calendars agree on leap years.
    for year in 1893..=2091 {
        let ny = new_year(year);
        assert_eq!((ny.year(), ny.month()), (year + 7, 9));
        let expected = if gregorian::is_leap_year(ny.year() + 1) { 12 } else { 11 };
        assert_eq!(ny.day(), expected, "New Year of {year}");
        // The sixth day of Pagume exists exactly when New Year is pushed to the 12th.
        assert_eq!(
            days_in_month(year - 1, 13) == 6,
            ny.day() == 12,
            "Pagume of {} vs New Year of {year}",
            year - 1
        );
    }
}

#[test]
fn consecutive_new_years_are_one_ethiopian_year_apart() {
    for year in 1..=3000 {
        let ny = new_year(year);
        assert_eq!(ny.year(), year + 7);
        assert_eq!(
            new_year(year + 1).days_since(ny),
            ec_time::date::days_in_year(year) as i32,
            "year {year}"
        );
    }
}

#[test]
fn leap_consistency() {
    for year in 1..=3000 {
        assert_eq!(days_in_month(year, 13) == 6, year % 4 == 3);
        assert_eq!(is_leap_year(year), year % 4 == 3);
    }
}

#[test]
fn weekday_matches_gregorian() {
    // Meskerem 1, 2016 was a Tuesday; step a week at a time.
    let mut d = e(2016, 1, 1);
    for _ in 0..200 {
        assert_eq!(d.weekday(), Weekday::Tuesday, "{d}");
        assert_eq!(d.weekday(), d.to_gregorian().weekday());
        d = d.add_days(7).unwrap();
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip() {
    let d = e(2016, 13, 5);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(serde_json::from_str::<EthiopianDate>(&json).unwrap(), d);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn ethiopian_date() -> impl Strategy<Value = EthiopianDate> {
    (1..=3000i32, 1..=13u8, 1..=30u8)
        .prop_map(|(y, m, d)| e(y, m, d.min(days_in_month(y, m))))
}

fn gregorian_date() -> impl Strategy<Value = GregorianDate> {
    (9..=3007i32, 1..=12u8, 1..=31u8)
        .prop_map(|(y, m, d)| g(y, m, d.min(gregorian::days_in_month(y, m))))
}

proptest! {
    #[test]
    fn prop_ethiopian_roundtrip(d in ethiopian_date()) {
        let greg = d.to_gregorian();
        prop_assert_eq!(EthiopianDate::from_gregorian(greg).unwrap(), d);
    }

    #[test]
    fn prop_gregorian_roundtrip(d in gregorian_date()) {
        let eth = d.to_ethiopian().unwrap();
        prop_assert_eq!(eth.to_gregorian(), d);
    }

    #[test]
    fn prop_serials_advance_together(d in ethiopian_date(), n in -5000i32..5000) {
        if let Ok(moved) = d.add_days(n) {
            prop_assert_eq!(moved.to_gregorian().days_since(d.to_gregorian()), n);
        }
    }
}
