//! Parsing of solar dates and local solar-term timestamps.
//!
//! Calendar tables carry dates either as ISO `YYYY-MM-DD` or as
//! slash-separated `M/D/YYYY`; solar-term tables carry local timestamps
//! with or without an offset, or only a date.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;

/// Parse a solar date.
///
/// Accepted forms:
/// - `YYYY-MM-DD`
/// - `M/D/YYYY`, falling back to `D/M/YYYY` when the month/day reading is
///   not a valid date
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_solar_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }

    if is_iso_date_shape(t) {
        return NaiveDate::parse_from_str(t, "%Y-%m-%d").ok();
    }

    let mut parts = t.split('/');
    let (Some(a), Some(b), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    if !(1..=2).contains(&a.len()) || !(1..=2).contains(&b.len()) || y.len() != 4 {
        return None;
    }
    let a: u32 = a.parse().ok()?;
    let b: u32 = b.parse().ok()?;
    let y: i32 = y.parse().ok()?;

    NaiveDate::from_ymd_opt(y, a, b).or_else(|| NaiveDate::from_ymd_opt(y, b, a))
}

/// Parse a strict ISO `YYYY-MM-DD` date, as entered by a caller.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TimeError> {
    let t = s.trim();
    if !is_iso_date_shape(t) {
        return Err(TimeError::InvalidDate(t.to_string()));
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(t.to_string()))
}

/// `dddd-dd-dd` with ASCII digits.
fn is_iso_date_shape(t: &str) -> bool {
    let b = t.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Parse a solar-term local timestamp.
///
/// `datetime` is tried first:
/// - RFC 3339 with an offset (`2026-01-05T15:03:00+09:00`); the wall-clock
///   time as written is kept and the offset dropped
/// - `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`, with anything after the
///   minutes ignored
///
/// If `datetime` is absent or unparseable, `date` (`YYYY-MM-DD`) is used at
/// 00:00.
pub fn parse_local_timestamp(datetime: Option<&str>, date: Option<&str>) -> Option<NaiveDateTime> {
    if let Some(dt) = datetime.map(str::trim).filter(|s| !s.is_empty()) {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(dt) {
            return Some(parsed.naive_local());
        }
        if let Some(parsed) = parse_date_hour_minute(dt) {
            return Some(parsed);
        }
    }

    let d = date.map(str::trim).filter(|s| !s.is_empty())?;
    let day = NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()?;
    day.and_hms_opt(0, 0, 0)
}

/// `YYYY-MM-DD[ T]HH:MM...` prefix.
fn parse_date_hour_minute(s: &str) -> Option<NaiveDateTime> {
    let day = s.get(0..10).filter(|d| is_iso_date_shape(d))?;
    let sep = s.get(10..11)?;
    if sep != " " && sep != "T" {
        return None;
    }
    let hh = s.get(11..13)?;
    let colon = s.get(13..14)?;
    let mm = s.get(14..16)?;
    let digits = |x: &str| x.bytes().all(|c| c.is_ascii_digit());
    if colon != ":" || !digits(hh) || !digits(mm) {
        return None;
    }
    let day = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    let time = NaiveTime::from_hms_opt(hh.parse().ok()?, mm.parse().ok()?, 0)?;
    Some(day.and_time(time))
}

/// Midnight of the day a term is attributed to.
///
/// A term falling at or after `cutoff_hour` local time counts from the
/// next calendar day; earlier terms count from their own day.
pub fn effective_start(timestamp: NaiveDateTime, cutoff_hour: u32) -> Option<NaiveDateTime> {
    let day = if timestamp.hour() >= cutoff_hour {
        timestamp.date().checked_add_signed(Duration::days(1))?
    } else {
        timestamp.date()
    };
    day.and_hms_opt(0, 0, 0)
}
