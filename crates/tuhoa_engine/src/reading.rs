//! The daily reading: both stems' transformations on one chart for one date.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use tuhoa_base::{
    Branch, HouseMap, MonthLabel, Stem, day_house, month_label_for_branch, month_labels_by_house,
    solar_months,
};
use tuhoa_chart::{
    BadgeMap, ExpandedChart, ExtraStarPlacement, PropagationResult, aggregate, compute_core,
    expand, mark_day_house, propagate,
};
use tuhoa_time::ActiveSolarMonth;

use crate::config::EngineConfig;
use crate::dataset::Datasets;
use crate::error::EngineError;

/// Everything a reading is computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingQuery {
    /// Chart group, usually found with `ChartIndex::find_group_by_pair`.
    pub group_id: u32,
    pub placement: ExtraStarPlacement,
    pub date: NaiveDate,
    pub timezone: String,
    /// Month label the person places at house Tý.
    pub anchor: MonthLabel,
}

/// Result of [`compute_reading`].
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReading {
    pub date: NaiveDate,
    pub year_stem: Stem,
    pub active_month: ActiveSolarMonth,
    /// Label of the active solar-term month.
    pub month_label: MonthLabel,
    /// Stem of the active month label.
    pub term_stem: Stem,
    pub labels_by_house: HouseMap<MonthLabel>,
    pub day_house: Branch,
    pub chart: ExpandedChart,
    pub year_spread: PropagationResult,
    pub term_spread: PropagationResult,
    /// Badges per house, day marker first on the day house.
    pub badges: BadgeMap,
}

impl Display for DailyReading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ngày: {} | Can năm: {} | Tháng tiết khí: {} (start {}, day {})",
            self.date,
            self.year_stem,
            self.month_label,
            self.active_month.start_date,
            self.active_month.day_index,
        )?;
        write!(f, " | Can tiết: {} | Ô ngày: {}", self.term_stem, self.day_house)
    }
}

/// The 12 solar-month labels of `date`'s lunisolar year.
///
/// These are the choices offered for the Tý anchor.
pub fn month_options(data: &Datasets, date: NaiveDate) -> Result<[MonthLabel; 12], EngineError> {
    let year_stem = data.calendar.year_stem(date)?;
    Ok(solar_months(year_stem))
}

/// Compute the reading for `query`.
pub fn compute_reading(
    data: &Datasets,
    query: &ReadingQuery,
    config: &EngineConfig,
) -> Result<DailyReading, EngineError> {
    let year_stem = data.calendar.year_stem(query.date)?;
    let active_month = data
        .solar_terms
        .active_month(&query.timezone, query.date, &config.solar_term_config())?;

    let months = solar_months(year_stem);
    let month_label = month_label_for_branch(active_month.month_branch, &months);
    let labels_by_house = month_labels_by_house(query.anchor, &months)?;
    let day = day_house(month_label, active_month.day_index, &labels_by_house)?;

    let group = data.charts.group(query.group_id)?;
    let chart = expand(group, &query.placement);

    let term_stem = month_label.stem;
    let year_spread = propagate(&compute_core(year_stem, &data.transforms, &chart)?);
    let term_spread = propagate(&compute_core(term_stem, &data.transforms, &chart)?);

    let mut badges = aggregate(
        &year_spread,
        &config.year_source_label,
        &term_spread,
        &config.term_source_label,
    );
    mark_day_house(&mut badges, day);

    Ok(DailyReading {
        date: query.date,
        year_stem,
        active_month,
        month_label,
        term_stem,
        labels_by_house,
        day_house: day,
        chart,
        year_spread,
        term_spread,
        badges,
    })
}
