//! Golden tests for solar-term month resolution.
//!
//! Uses an inline 2025 term table for Asia/Ho_Chi_Minh (local times, UTC+7),
//! so no data files are needed.

use chrono::NaiveDate;
use tuhoa_base::{Branch, ErrorKind};
use tuhoa_time::{
    MonthStartTerm, SolarTermConfig, SolarTermEvent, SolarTermIndex, TimeError,
};

const TZ: &str = "Asia/Ho_Chi_Minh";

const TERMS_2025: &[(i32, &str, &str)] = &[
    (2025, "minor_cold", "2025-01-05T10:33:00+07:00"),
    (2025, "start_of_spring", "2025-02-03T22:10:00+07:00"),
    (2025, "rain_water", "2025-02-18T18:06:00+07:00"),
    (2025, "awakening_of_insects", "2025-03-05T16:07:00+07:00"),
    (2025, "pure_brightness", "2025-04-04T20:48:00+07:00"),
    (2025, "start_of_summer", "2025-05-05T13:57:00+07:00"),
    (2025, "grain_in_ear", "2025-06-05T17:56:00+07:00"),
    (2025, "minor_heat", "2025-07-07T04:05:00+07:00"),
    (2025, "start_of_autumn", "2025-08-07T13:51:00+07:00"),
    (2025, "white_dew", "2025-09-07T16:52:00+07:00"),
    (2025, "cold_dew", "2025-10-08T08:41:00+07:00"),
    (2025, "start_of_winter", "2025-11-07T12:04:00+07:00"),
    (2025, "major_snow", "2025-12-07T07:05:00+07:00"),
    (2026, "minor_cold", "2026-01-05T18:23:00+07:00"),
    (2026, "start_of_spring", "2026-02-04T04:02:00+07:00"),
];

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn index() -> SolarTermIndex {
    SolarTermIndex::build(TERMS_2025.iter().map(|(year, key, dt)| SolarTermEvent {
        timezone: TZ.into(),
        year: Some(*year),
        term_key: (*key).into(),
        datetime_local: Some((*dt).into()),
        date_local: None,
    }))
}

// ---------------------------------------------------------------------------
// Cutoff boundaries
// ---------------------------------------------------------------------------

#[test]
fn late_evening_spring_opens_next_day() {
    let idx = index();
    let cfg = SolarTermConfig::default();

    let before = idx.active_month(TZ, ymd(2025, 2, 3), &cfg).unwrap();
    assert_eq!(before.month_branch, Branch::Suu);
    assert_eq!(before.start_date, ymd(2025, 1, 5));
    assert_eq!(before.day_index, 30);

    let first = idx.active_month(TZ, ymd(2025, 2, 4), &cfg).unwrap();
    assert_eq!(first.month_branch, Branch::Dan);
    assert_eq!(first.term, MonthStartTerm::StartOfSpring);
    assert_eq!(first.day_index, 1);
}

#[test]
fn just_after_cutoff_counts_from_next_day() {
    let idx = index();
    let m = idx
        .active_month(TZ, ymd(2025, 5, 5), &SolarTermConfig::default())
        .unwrap();
    assert_eq!(m.month_branch, Branch::Thin);
    assert_eq!(m.day_index, 32);

    let m = idx
        .active_month(TZ, ymd(2025, 5, 6), &SolarTermConfig::default())
        .unwrap();
    assert_eq!(m.month_branch, Branch::Ti);
    assert_eq!(m.day_index, 1);
}

#[test]
fn just_before_cutoff_keeps_its_day() {
    let m = index()
        .active_month(TZ, ymd(2025, 11, 7), &SolarTermConfig::default())
        .unwrap();
    assert_eq!(m.month_branch, Branch::Hoi);
    assert_eq!(m.start_date, ymd(2025, 11, 7));
    assert_eq!(m.day_index, 1);
}

#[test]
fn configured_cutoff_moves_boundary() {
    let m = index()
        .active_month(TZ, ymd(2025, 2, 3), &SolarTermConfig::new(23))
        .unwrap();
    assert_eq!(m.month_branch, Branch::Dan);
    assert_eq!(m.day_index, 1);
}

// ---------------------------------------------------------------------------
// Year boundary
// ---------------------------------------------------------------------------

#[test]
fn january_uses_previous_year_major_snow() {
    let idx = index();
    let cfg = SolarTermConfig::default();

    let m = idx.active_month(TZ, ymd(2026, 1, 4), &cfg).unwrap();
    assert_eq!(m.month_branch, Branch::Ty);
    assert_eq!(m.start_date, ymd(2025, 12, 7));
    assert_eq!(m.day_index, 29);
    assert!(!m.is_fallback);

    // Minor cold at 18:23 opens Sửu on the 6th.
    let m = idx.active_month(TZ, ymd(2026, 1, 5), &cfg).unwrap();
    assert_eq!(m.month_branch, Branch::Ty);
    assert_eq!(m.day_index, 30);
    let m = idx.active_month(TZ, ymd(2026, 1, 6), &cfg).unwrap();
    assert_eq!(m.month_branch, Branch::Suu);
    assert_eq!(m.day_index, 1);
}

#[test]
fn full_year_walks_months_in_order() {
    let idx = index();
    let cfg = SolarTermConfig::default();
    let mut prev = idx.active_month(TZ, ymd(2025, 2, 4), &cfg).unwrap();
    let mut month_changes = 0;

    for date in ymd(2025, 2, 5).iter_days().take_while(|d| *d < ymd(2026, 2, 4)) {
        let m = idx.active_month(TZ, date, &cfg).unwrap();
        assert!(!m.is_fallback, "fallback on {date}");
        if m.month_branch == prev.month_branch {
            assert_eq!(m.day_index, prev.day_index + 1, "day index on {date}");
        } else {
            assert_eq!(m.month_branch, prev.month_branch.advance(1), "month on {date}");
            assert_eq!(m.day_index, 1, "first day on {date}");
            month_changes += 1;
        }
        prev = m;
    }
    assert_eq!(month_changes, 11);
    assert_eq!(prev.month_branch, Branch::Suu);
}

// ---------------------------------------------------------------------------
// Fallback and errors
// ---------------------------------------------------------------------------

#[test]
fn early_january_without_prior_year_falls_back() {
    let m = index()
        .active_month(TZ, ymd(2025, 1, 2), &SolarTermConfig::default())
        .unwrap();
    assert!(m.is_fallback);
    assert_eq!(m.month_branch, Branch::Ty);
    assert_eq!(m.start_date, ymd(2025, 12, 7));
    assert!(m.day_index <= 0);
}

#[test]
fn date_only_rows_start_at_midnight() {
    let idx = SolarTermIndex::build([SolarTermEvent {
        timezone: "Asia/Tokyo".into(),
        year: Some(2025),
        term_key: "start_of_summer".into(),
        datetime_local: None,
        date_local: Some("2025-05-05".into()),
    }]);
    let m = idx
        .active_month("Asia/Tokyo", ymd(2025, 5, 5), &SolarTermConfig::default())
        .unwrap();
    assert_eq!(m.start_date, ymd(2025, 5, 5));
    assert_eq!(m.day_index, 1);
}

#[test]
fn unparseable_rows_are_not_candidates() {
    let idx = SolarTermIndex::build([SolarTermEvent {
        timezone: "UTC".into(),
        year: Some(2025),
        term_key: "start_of_spring".into(),
        datetime_local: Some("tbd".into()),
        date_local: None,
    }]);
    let err = idx
        .active_month("UTC", ymd(2025, 3, 1), &SolarTermConfig::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataError);
    assert!(matches!(err, TimeError::NoMonthStart { year: 2025, .. }));
}

#[test]
fn missing_timezone_is_data_error() {
    let err = index()
        .active_month("Asia/Bangkok", ymd(2025, 3, 1), &SolarTermConfig::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataError);
    assert!(err.to_string().contains("Asia/Bangkok"));
}
