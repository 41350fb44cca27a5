//! Solar date → lunisolar year-stem index.
//!
//! Built once from the calendar table (one row per solar date) and read-only
//! afterwards.

use std::collections::HashMap;

use chrono::NaiveDate;
use tuhoa_base::Stem;

use crate::date::parse_solar_date;
use crate::error::TimeError;

/// One calendar-table row as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarRow {
    /// Solar (Gregorian) date text, `YYYY-MM-DD` or `M/D/YYYY`.
    pub solar_date: String,
    /// Lunisolar year stem name (`nam_can`), possibly blank.
    pub year_stem: String,
}

impl CalendarRow {
    pub fn new(solar_date: impl Into<String>, year_stem: impl Into<String>) -> Self {
        Self {
            solar_date: solar_date.into(),
            year_stem: year_stem.into(),
        }
    }
}

/// Lunisolar record for one solar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRecord {
    pub date: NaiveDate,
    /// Year stem as written in the table (trimmed).
    pub year_stem: String,
}

/// Lookup from solar date to its lunisolar record.
#[derive(Debug, Clone, Default)]
pub struct CalendarIndex {
    records: HashMap<NaiveDate, CalendarRecord>,
    skipped: usize,
}

impl CalendarIndex {
    /// Index calendar rows by solar date.
    ///
    /// Rows whose date cannot be parsed are skipped (and counted, see
    /// [`CalendarIndex::skipped_rows`]). A later row for the same date
    /// replaces an earlier one.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CalendarRow>,
    {
        let mut records = HashMap::new();
        let mut skipped = 0;
        for row in rows {
            let Some(date) = parse_solar_date(&row.solar_date) else {
                skipped += 1;
                continue;
            };
            records.insert(
                date,
                CalendarRecord {
                    date,
                    year_stem: row.year_stem.trim().to_string(),
                },
            );
        }
        Self { records, skipped }
    }

    /// Record for a date, if the table covers it.
    pub fn get(&self, date: NaiveDate) -> Option<&CalendarRecord> {
        self.records.get(&date)
    }

    /// Lunisolar year stem for a solar date.
    pub fn year_stem(&self, date: NaiveDate) -> Result<Stem, TimeError> {
        let record = self.get(date).ok_or(TimeError::DateNotInCalendar(date))?;
        if record.year_stem.is_empty() {
            return Err(TimeError::MissingYearStem(date));
        }
        Ok(Stem::from_name(&record.year_stem)?)
    }

    /// First and last covered dates.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.keys().min()?;
        let last = self.records.keys().max()?;
        Some((*first, *last))
    }

    /// Number of indexed dates.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no dates are indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped during [`CalendarIndex::build`] for an unparseable date.
    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuhoa_base::{BaseError, ErrorKind};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CalendarIndex {
        CalendarIndex::build([
            CalendarRow::new("2024-02-09", "Quý"),
            CalendarRow::new("2/10/2024", " Giáp "),
            CalendarRow::new("2024-02-11", ""),
            CalendarRow::new("2024-02-12", "Gi"),
            CalendarRow::new("not a date", "Giáp"),
        ])
    }

    #[test]
    fn indexes_both_date_forms() {
        let idx = sample();
        assert_eq!(idx.len(), 4);
        assert_eq!(idx.skipped_rows(), 1);
        assert_eq!(idx.year_stem(ymd(2024, 2, 9)).unwrap(), Stem::Quy);
        assert_eq!(idx.year_stem(ymd(2024, 2, 10)).unwrap(), Stem::Giap);
        assert_eq!(idx.range(), Some((ymd(2024, 2, 9), ymd(2024, 2, 12))));
    }

    #[test]
    fn missing_date_is_data_error() {
        let err = sample().year_stem(ymd(2030, 1, 1)).unwrap_err();
        assert_eq!(err, TimeError::DateNotInCalendar(ymd(2030, 1, 1)));
        assert_eq!(err.kind(), ErrorKind::DataError);
    }

    #[test]
    fn blank_stem_is_data_error() {
        let err = sample().year_stem(ymd(2024, 2, 11)).unwrap_err();
        assert_eq!(err, TimeError::MissingYearStem(ymd(2024, 2, 11)));
    }

    #[test]
    fn malformed_stem_is_invalid_input() {
        let err = sample().year_stem(ymd(2024, 2, 12)).unwrap_err();
        assert_eq!(err, TimeError::Base(BaseError::InvalidStem("Gi".into())));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn later_row_wins() {
        let idx = CalendarIndex::build([
            CalendarRow::new("2024-01-01", "Quý"),
            CalendarRow::new("1/1/2024", "Giáp"),
        ]);
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.year_stem(ymd(2024, 1, 1)).unwrap(), Stem::Giap);
    }
}
