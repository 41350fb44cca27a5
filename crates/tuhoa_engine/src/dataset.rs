//! Loading the four data tables into their indices.
//!
//! | Table        | Columns                                                    |
//! |--------------|------------------------------------------------------------|
//! | charts       | `GroupID, Loại, Cung địa chi, Chính Tinh, Lá tại Tý`       |
//! | conditions   | headerless; the Tứ Hóa block starts at a `Can` row         |
//! | calendar     | `duong, nam_can`                                           |
//! | solar terms  | `timezone, year, term_key, datetime_local, date_local`     |

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};
use tuhoa_chart::{ChartIndex, ChartRow, TransformTable};
use tuhoa_time::{CalendarIndex, CalendarRow, SolarTermEvent, SolarTermIndex};

use crate::error::EngineError;
use crate::table::{Table, field, parse_rows};

/// Value of `GroupID` on header lines repeated inside the chart table.
const GROUP_ID_ECHO: &str = "group_id";

/// Locations of the four data files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub charts: PathBuf,
    pub conditions: PathBuf,
    pub calendar: PathBuf,
    pub solar_terms: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            charts: PathBuf::from("data/DATA_laso.csv"),
            conditions: PathBuf::from("data/data_condition.csv"),
            calendar: PathBuf::from("data/amlich_normalized.csv"),
            solar_terms: PathBuf::from("data/solar_terms.csv"),
        }
    }
}

impl DataPaths {
    /// Resolve relative paths against `base`.
    pub fn relative_to(&self, base: &Path) -> Self {
        let join = |p: &Path| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.to_path_buf()
            }
        };
        Self {
            charts: join(&self.charts),
            conditions: join(&self.conditions),
            calendar: join(&self.calendar),
            solar_terms: join(&self.solar_terms),
        }
    }
}

/// All indices a reading needs, built once.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub charts: ChartIndex,
    pub transforms: TransformTable,
    pub calendar: CalendarIndex,
    pub solar_terms: SolarTermIndex,
}

impl Datasets {
    /// Read and index the four files.
    pub fn load(paths: &DataPaths) -> Result<Self, EngineError> {
        let charts = read(&paths.charts)?;
        let conditions = read(&paths.conditions)?;
        let calendar = read(&paths.calendar)?;
        let solar_terms = read(&paths.solar_terms)?;
        Self::from_texts(&charts, &conditions, &calendar, &solar_terms)
    }

    /// Index the four tables from their text content.
    pub fn from_texts(
        charts: &str,
        conditions: &str,
        calendar: &str,
        solar_terms: &str,
    ) -> Result<Self, EngineError> {
        let charts = ChartIndex::build(chart_rows(&Table::parse(charts)?)?)?;
        info!(
            groups = charts.len(),
            pairs = charts.pair_count(),
            "chart index built"
        );

        let transforms = TransformTable::from_raw_rows(&parse_rows(conditions)?)?;
        info!(stems = transforms.len(), "transformation table built");

        let calendar = CalendarIndex::build(calendar_rows(&Table::parse(calendar)?)?);
        if calendar.skipped_rows() > 0 {
            warn!(
                skipped = calendar.skipped_rows(),
                "calendar rows with unparseable dates skipped"
            );
        }
        match calendar.range() {
            Some((first, last)) => info!(days = calendar.len(), %first, %last, "calendar indexed"),
            None => warn!("calendar table is empty"),
        }

        let solar_terms = SolarTermIndex::build(solar_term_events(&Table::parse(solar_terms)?)?);
        info!(
            events = solar_terms.len(),
            timezones = solar_terms.timezones().len(),
            "solar-term index built"
        );
        for tz in solar_terms.timezones() {
            debug!(timezone = tz, events = solar_terms.events(tz).len(), "solar terms");
        }

        Ok(Self {
            charts,
            transforms,
            calendar,
            solar_terms,
        })
    }
}

fn read(path: &Path) -> Result<String, EngineError> {
    debug!(path = %path.display(), "reading table");
    std::fs::read_to_string(path)
        .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))
}

/// Chart rows from the chart table.
///
/// Header echoes (`GroupID` = `group_id`) are dropped; rows with a
/// non-numeric group id are skipped with a warning.
pub fn chart_rows(table: &Table) -> Result<Vec<ChartRow>, EngineError> {
    const NAME: &str = "charts";
    let gid = table.require_column(NAME, "GroupID")?;
    let kind = table.require_column(NAME, "Loại")?;
    let house = table.require_column(NAME, "Cung địa chi")?;
    let star = table.require_column(NAME, "Chính Tinh")?;
    let pair = table.column("Lá tại Tý");

    let mut rows = Vec::with_capacity(table.len());
    for record in table.records() {
        let id_text = field(record, gid);
        if id_text == GROUP_ID_ECHO {
            continue;
        }
        let Ok(group_id) = id_text.parse::<u32>() else {
            warn!(group_id = id_text, "chart row with invalid group id skipped");
            continue;
        };
        rows.push(ChartRow {
            group_id,
            kind: field(record, kind).to_string(),
            house: field(record, house).to_string(),
            star: field(record, star).to_string(),
            pair_key: pair.map(|c| field(record, c)).unwrap_or("").to_string(),
        });
    }
    Ok(rows)
}

/// Calendar rows from the calendar table.
pub fn calendar_rows(table: &Table) -> Result<Vec<CalendarRow>, EngineError> {
    const NAME: &str = "calendar";
    let date = table.require_column(NAME, "duong")?;
    let stem = table.require_column(NAME, "nam_can")?;
    Ok(table
        .records()
        .iter()
        .map(|r| CalendarRow::new(field(r, date), field(r, stem)))
        .collect())
}

/// Solar-term events from the solar-term table.
///
/// At least one of `datetime_local` and `date_local` must be present.
pub fn solar_term_events(table: &Table) -> Result<Vec<SolarTermEvent>, EngineError> {
    const NAME: &str = "solar terms";
    let tz = table.require_column(NAME, "timezone")?;
    let year = table.require_column(NAME, "year")?;
    let key = table.require_column(NAME, "term_key")?;
    let datetime = table.column("datetime_local");
    let date = table.column("date_local");
    if datetime.is_none() && date.is_none() {
        return Err(EngineError::MissingColumn {
            table: NAME,
            column: "datetime_local".to_string(),
        });
    }

    let optional = |record: &[String], col: Option<usize>| {
        col.map(|c| field(record, c))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Ok(table
        .records()
        .iter()
        .map(|r| SolarTermEvent {
            timezone: field(r, tz).to_string(),
            year: field(r, year).parse().ok(),
            term_key: field(r, key).to_string(),
            datetime_local: optional(r.as_slice(), datetime),
            date_local: optional(r.as_slice(), date),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuhoa_base::Branch;

    #[test]
    fn chart_rows_skip_echoes_and_bad_ids() {
        let t = Table::parse(
            "GroupID,Loại,Cung địa chi,Chính Tinh,Lá tại Tý\n\
             group_id,Loại,Cung,Sao,\n\
             3,A,Tý,Tử Vi,Tử Vi|Thiên Phủ\n\
             x,A,Tý,Tử Vi,\n",
        )
        .unwrap();
        let rows = chart_rows(&t).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group_id, 3);
        assert_eq!(rows[0].pair_key, "Tử Vi|Thiên Phủ");
    }

    #[test]
    fn chart_pair_column_is_optional() {
        let t = Table::parse("GroupID,Loại,Cung địa chi,Chính Tinh\n1,A,Ngọ,Thất Sát\n").unwrap();
        let idx = ChartIndex::build(chart_rows(&t).unwrap()).unwrap();
        assert_eq!(idx.group(1).unwrap().stars(Branch::Ngo), ["Thất Sát"]);
        assert_eq!(idx.pair_count(), 0);
    }

    #[test]
    fn missing_required_column() {
        let t = Table::parse("duong\n2024-01-01\n").unwrap();
        assert_eq!(
            calendar_rows(&t).unwrap_err(),
            EngineError::MissingColumn {
                table: "calendar",
                column: "nam_can".into()
            }
        );
    }

    #[test]
    fn solar_term_optional_cells() {
        let t = Table::parse(
            "timezone,year,term_key,date_local\n\
             UTC,2025,start_of_spring,2025-02-03\n\
             UTC,n/a,minor_cold,\n",
        )
        .unwrap();
        let events = solar_term_events(&t).unwrap();
        assert_eq!(events[0].year, Some(2025));
        assert_eq!(events[0].datetime_local, None);
        assert_eq!(events[0].date_local.as_deref(), Some("2025-02-03"));
        assert_eq!(events[1].year, None);
        assert_eq!(events[1].date_local, None);
    }

    #[test]
    fn solar_terms_need_a_time_column() {
        let t = Table::parse("timezone,year,term_key\nUTC,2025,minor_cold\n").unwrap();
        assert!(matches!(
            solar_term_events(&t),
            Err(EngineError::MissingColumn { .. })
        ));
    }

    #[test]
    fn relative_paths_join_base() {
        let p = DataPaths::default().relative_to(Path::new("/srv/tuhoa"));
        assert_eq!(p.calendar, Path::new("/srv/tuhoa/data/amlich_normalized.csv"));
    }
}
