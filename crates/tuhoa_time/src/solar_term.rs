//! Per-timezone solar-term index and active-month resolution.
//!
//! A solar-term month opens at one of 12 "tiết" terms. For a date we pick
//! the latest opening term at or before it, considering terms filed under
//! the date's year and the previous year so that the Tý and Sửu months
//! (which open in December/January) resolve across the Gregorian new year.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::date::{effective_start, parse_iso_date, parse_local_timestamp};
use crate::error::TimeError;
use crate::solar_term_types::{ActiveSolarMonth, MonthStartTerm, SolarTermConfig, SolarTermEvent};

/// Solar-term events grouped by timezone, each list sorted by local time.
#[derive(Debug, Clone, Default)]
pub struct SolarTermIndex {
    by_timezone: HashMap<String, Vec<SolarTermEvent>>,
}

/// A month-opening event with its effective start day.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: NaiveDate,
    term: MonthStartTerm,
}

impl SolarTermIndex {
    /// Group events by (trimmed) timezone. Events with a blank timezone are
    /// dropped.
    pub fn build<I>(events: I) -> Self
    where
        I: IntoIterator<Item = SolarTermEvent>,
    {
        let mut by_timezone: HashMap<String, Vec<SolarTermEvent>> = HashMap::new();
        for mut ev in events {
            let tz = ev.timezone.trim().to_string();
            if tz.is_empty() {
                continue;
            }
            ev.timezone.clone_from(&tz);
            by_timezone.entry(tz).or_default().push(ev);
        }
        for list in by_timezone.values_mut() {
            list.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
        }
        Self { by_timezone }
    }

    /// Known timezones, sorted.
    pub fn timezones(&self) -> Vec<&str> {
        let mut tzs: Vec<&str> = self.by_timezone.keys().map(String::as_str).collect();
        tzs.sort_unstable();
        tzs
    }

    /// All events of a timezone in local-time order (empty if unknown).
    pub fn events(&self, timezone: &str) -> &[SolarTermEvent] {
        self.by_timezone
            .get(timezone.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of indexed events.
    pub fn len(&self) -> usize {
        self.by_timezone.values().map(Vec::len).sum()
    }

    /// Whether no events are indexed.
    pub fn is_empty(&self) -> bool {
        self.by_timezone.is_empty()
    }

    /// Solar-term month containing `date` in `timezone`.
    ///
    /// Candidates are the month-opening terms filed under `date.year()` or
    /// the year before, each moved to its effective start day by the cutoff
    /// rule. The latest candidate starting on or before `date` wins; if
    /// none does, the latest candidate overall is used and
    /// [`ActiveSolarMonth::is_fallback`] is set.
    pub fn active_month(
        &self,
        timezone: &str,
        date: NaiveDate,
        config: &SolarTermConfig,
    ) -> Result<ActiveSolarMonth, TimeError> {
        let events = self.events(timezone);
        if events.is_empty() {
            return Err(TimeError::NoSolarTerms {
                timezone: timezone.trim().to_string(),
            });
        }

        let year = date.year();
        let mut candidates: Vec<Candidate> = events
            .iter()
            .filter(|e| matches!(e.year, Some(y) if y == year || y == year - 1))
            .filter_map(|e| {
                let term = MonthStartTerm::from_key(&e.term_key)?;
                let ts =
                    parse_local_timestamp(e.datetime_local.as_deref(), e.date_local.as_deref())?;
                let start = effective_start(ts, config.cutoff_hour)?.date();
                Some(Candidate { start, term })
            })
            .collect();
        candidates.sort_by_key(|c| c.start);

        let (active, is_fallback) = match candidates.iter().rev().find(|c| c.start <= date) {
            Some(c) => (*c, false),
            None => match candidates.last() {
                Some(c) => (*c, true),
                None => {
                    return Err(TimeError::NoMonthStart {
                        timezone: timezone.trim().to_string(),
                        year,
                    });
                }
            },
        };

        Ok(ActiveSolarMonth {
            year,
            start_date: active.start,
            day_index: (date - active.start).num_days() + 1,
            month_branch: active.term.branch(),
            term: active.term,
            is_fallback,
        })
    }

    /// [`SolarTermIndex::active_month`] for an ISO `YYYY-MM-DD` date string.
    pub fn active_month_on(
        &self,
        timezone: &str,
        iso_date: &str,
        config: &SolarTermConfig,
    ) -> Result<ActiveSolarMonth, TimeError> {
        let date = parse_iso_date(iso_date)?;
        self.active_month(timezone, date, config)
    }
}
