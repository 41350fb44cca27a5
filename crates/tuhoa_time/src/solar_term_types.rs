//! Types for solar-term events and active-month resolution.

use chrono::NaiveDate;
use tuhoa_base::Branch;

/// Default local hour from which a term is attributed to the next day.
pub const DEFAULT_CUTOFF_HOUR: u32 = 13;

/// The 12 "tiết" terms that open a solar-term month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthStartTerm {
    StartOfSpring,
    AwakeningOfInsects,
    PureBrightness,
    StartOfSummer,
    GrainInEar,
    MinorHeat,
    StartOfAutumn,
    WhiteDew,
    ColdDew,
    StartOfWinter,
    MajorSnow,
    MinorCold,
}

/// All 12 month-opening terms, Dần month first.
pub const ALL_MONTH_START_TERMS: [MonthStartTerm; 12] = [
    MonthStartTerm::StartOfSpring,
    MonthStartTerm::AwakeningOfInsects,
    MonthStartTerm::PureBrightness,
    MonthStartTerm::StartOfSummer,
    MonthStartTerm::GrainInEar,
    MonthStartTerm::MinorHeat,
    MonthStartTerm::StartOfAutumn,
    MonthStartTerm::WhiteDew,
    MonthStartTerm::ColdDew,
    MonthStartTerm::StartOfWinter,
    MonthStartTerm::MajorSnow,
    MonthStartTerm::MinorCold,
];

impl MonthStartTerm {
    /// Key used in the solar-term table (`term_key` column).
    pub const fn key(self) -> &'static str {
        match self {
            Self::StartOfSpring => "start_of_spring",
            Self::AwakeningOfInsects => "awakening_of_insects",
            Self::PureBrightness => "pure_brightness",
            Self::StartOfSummer => "start_of_summer",
            Self::GrainInEar => "grain_in_ear",
            Self::MinorHeat => "minor_heat",
            Self::StartOfAutumn => "start_of_autumn",
            Self::WhiteDew => "white_dew",
            Self::ColdDew => "cold_dew",
            Self::StartOfWinter => "start_of_winter",
            Self::MajorSnow => "major_snow",
            Self::MinorCold => "minor_cold",
        }
    }

    /// Branch of the month this term opens.
    pub const fn branch(self) -> Branch {
        match self {
            Self::StartOfSpring => Branch::Dan,
            Self::AwakeningOfInsects => Branch::Mao,
            Self::PureBrightness => Branch::Thin,
            Self::StartOfSummer => Branch::Ti,
            Self::GrainInEar => Branch::Ngo,
            Self::MinorHeat => Branch::Mui,
            Self::StartOfAutumn => Branch::Than,
            Self::WhiteDew => Branch::Dau,
            Self::ColdDew => Branch::Tuat,
            Self::StartOfWinter => Branch::Hoi,
            Self::MajorSnow => Branch::Ty,
            Self::MinorCold => Branch::Suu,
        }
    }

    /// Term for a table key; `None` for the 12 mid-month terms and anything
    /// else.
    pub fn from_key(key: &str) -> Option<Self> {
        let k = key.trim();
        ALL_MONTH_START_TERMS.iter().copied().find(|t| t.key() == k)
    }
}

/// One solar-term row for a timezone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolarTermEvent {
    pub timezone: String,
    /// Calendar year the row is filed under; `None` if the cell did not parse.
    pub year: Option<i32>,
    pub term_key: String,
    /// Local date-time text, e.g. `2026-02-04T04:02:00+07:00`.
    pub datetime_local: Option<String>,
    /// Local date text, used when no date-time is given.
    pub date_local: Option<String>,
}

impl SolarTermEvent {
    /// Text used to order events within a timezone.
    pub fn sort_key(&self) -> &str {
        self.datetime_local
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| self.date_local.as_deref().map(str::trim))
            .unwrap_or("")
    }
}

/// Configuration for active-month resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermConfig {
    /// Terms at or after this local hour count from the next day.
    pub cutoff_hour: u32,
}

impl SolarTermConfig {
    pub fn new(cutoff_hour: u32) -> Self {
        Self { cutoff_hour }
    }
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF_HOUR)
    }
}

/// The solar-term month a date falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSolarMonth {
    /// Calendar year of the queried date.
    pub year: i32,
    /// Effective first day of the month (after cutoff rounding).
    pub start_date: NaiveDate,
    /// 1-based day within the month; the start date is day 1.
    pub day_index: i64,
    /// Branch of the month.
    pub month_branch: Branch,
    /// Term that opened the month.
    pub term: MonthStartTerm,
    /// Whether no term started on or before the date and the latest
    /// candidate was taken instead.
    pub is_fallback: bool,
}
