use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tuhoa_base::{
    ALL_BRANCHES, ALL_CATEGORIES, ALL_RELATIONS, Branch, MonthLabel, Stem, day_house,
    month_label_for_branch, month_labels_by_house, opposite, paired, solar_months, triadic,
};
use tuhoa_chart::{ExtraStarPlacement, PropagationResult};
use tuhoa_engine::{
    DailyReading, Datasets, EngineConfig, EngineError, ReadingQuery, compute_reading,
    month_options,
};
use tuhoa_time::parse_iso_date;

#[derive(Parser)]
#[command(name = "tuhoa", about = "Tứ Hóa daily transformation CLI")]
struct Cli {
    /// TOML config file (cutoff hour, badge labels, data paths)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the solar-term cutoff hour (0-24)
    #[arg(long, global = true)]
    cutoff_hour: Option<u32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// The 12 solar-month labels for a year stem
    Months {
        /// Year stem, e.g. "Giáp"
        year_stem: String,
        /// Month label placed at Tý; also prints the house layout
        #[arg(long)]
        anchor: Option<String>,
    },
    /// House of day N of a solar-term month
    DayHouse {
        /// Year stem, e.g. "Giáp"
        #[arg(long)]
        year_stem: String,
        /// Month label placed at Tý, e.g. "Bính Dần"
        #[arg(long)]
        anchor: String,
        /// Label of the active month, e.g. "Đinh Mão"
        #[arg(long)]
        month: String,
        /// 1-based day within the month
        #[arg(long)]
        day: i64,
    },
    /// Opposite, paired and triadic houses of a branch
    Relations {
        /// Branch name, e.g. "Tý"
        house: String,
    },
    /// Chart group whose Tý house holds the two main stars
    FindGroup {
        star_a: String,
        star_b: String,
    },
    /// Main star names in the chart table
    Stars,
    /// Transformation row for a stem
    Transforms {
        /// Stem, e.g. "Ất"
        stem: String,
    },
    /// Categories a star can carry across all stems
    StarCategories {
        star: String,
    },
    /// Active solar-term month for a date and timezone
    ActiveMonth {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Timezone as named in the solar-term table
        #[arg(long)]
        timezone: String,
    },
    /// Month labels offered for the Tý anchor on a date
    MonthOptions {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Full reading: badges per house for a chart and date
    Reading {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Timezone as named in the solar-term table
        #[arg(long)]
        timezone: String,
        /// Chart group id
        #[arg(long, conflicts_with = "stars", required_unless_present = "stars")]
        group: Option<u32>,
        /// The two main stars at Tý, "A|B"
        #[arg(long)]
        stars: Option<String>,
        /// Month label placed at Tý, e.g. "Bính Dần"
        #[arg(long)]
        anchor: String,
        /// House of Tả Phù
        #[arg(long)]
        ta_phu: String,
        /// House of Hữu Bật
        #[arg(long)]
        huu_bat: String,
        /// House of Văn Xương
        #[arg(long)]
        van_xuong: String,
        /// House of Văn Khúc
        #[arg(long)]
        van_khuc: String,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tuhoa_engine=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>, cutoff_hour: Option<u32>) -> EngineConfig {
    let config = match path {
        Some(p) => EngineConfig::load(p)
            .unwrap_or_else(|e| fail(format!("Failed to load config: {e}"))),
        None => EngineConfig::default(),
    };
    with_overrides(config, cutoff_hour).unwrap_or_else(|e| fail(e))
}

/// Apply command-line overrides and re-check the result.
fn with_overrides(
    mut config: EngineConfig,
    cutoff_hour: Option<u32>,
) -> Result<EngineConfig, EngineError> {
    if let Some(h) = cutoff_hour {
        config.cutoff_hour = h;
    }
    config.validate()?;
    Ok(config)
}

fn load_data(config: &EngineConfig) -> Datasets {
    Datasets::load(&config.data).unwrap_or_else(|e| fail(format!("Failed to load data: {e}")))
}

fn require_stem(s: &str) -> Stem {
    Stem::from_name(s).unwrap_or_else(|e| fail(e))
}

fn require_branch(s: &str) -> Branch {
    Branch::from_name(s).unwrap_or_else(|e| fail(e))
}

fn require_label(s: &str) -> MonthLabel {
    MonthLabel::parse(s).unwrap_or_else(|e| fail(e))
}

fn require_date(s: &str) -> NaiveDate {
    parse_iso_date(s).unwrap_or_else(|e| fail(e))
}

/// Split "A|B" into two trimmed star names.
fn parse_star_pair(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok((a.to_string(), b.to_string())),
        _ => Err(format!("expected two star names as \"A|B\", got {s:?}")),
    }
}

fn join_houses<'a>(houses: impl IntoIterator<Item = &'a Branch>) -> String {
    let names: Vec<&str> = houses.into_iter().map(|h| h.name()).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

fn print_spread(title: &str, spread: &PropagationResult) {
    println!("{title}");
    let headings: Vec<&str> = ALL_RELATIONS.iter().map(|r| r.heading()).collect();
    println!("  {:<10} | {}", "Loại Hóa", headings.join(" | "));
    for category in ALL_CATEGORIES {
        let sets = &spread[category];
        let cells: Vec<String> = ALL_RELATIONS
            .iter()
            .map(|r| join_houses(sets.get(*r)))
            .collect();
        println!("  {:<10} | {}", category.name(), cells.join(" | "));
    }
}

fn print_reading(r: &DailyReading) {
    println!("{r}");
    println!();
    print_spread(&format!("Can năm: {}", r.year_stem), &r.year_spread);
    print_spread(&format!("Can tiết: {}", r.term_stem), &r.term_spread);
    println!();
    for house in ALL_BRANCHES {
        let stars = &r.chart[house];
        let badges: Vec<String> = r.badges[house].iter().map(ToString::to_string).collect();
        println!(
            "{:<5} [{}] {}",
            house.name(),
            stars.join(", "),
            if badges.is_empty() { "-".to_string() } else { badges.join("; ") }
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Months { year_stem, anchor } => {
            let months = solar_months(require_stem(&year_stem));
            for (i, m) in months.iter().enumerate() {
                println!("{:>2}. {m}", i + 1);
            }
            if let Some(anchor) = anchor {
                let by_house = month_labels_by_house(require_label(&anchor), &months)
                    .unwrap_or_else(|e| fail(e));
                println!();
                for (house, label) in by_house.iter() {
                    println!("{:<5} {label}", house.name());
                }
            }
        }

        Commands::DayHouse {
            year_stem,
            anchor,
            month,
            day,
        } => {
            let months = solar_months(require_stem(&year_stem));
            let by_house = month_labels_by_house(require_label(&anchor), &months)
                .unwrap_or_else(|e| fail(e));
            let house =
                day_house(require_label(&month), day, &by_house).unwrap_or_else(|e| fail(e));
            println!("{house}");
        }

        Commands::Relations { house } => {
            let h = require_branch(&house);
            let [t1, t2] = triadic(h);
            println!("Đối cung: {}", opposite(h));
            println!("Nhị hợp:  {}", paired(h));
            println!("Tam hợp:  {t1}, {t2}");
        }

        Commands::FindGroup { star_a, star_b } => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);
            let gid = data
                .charts
                .find_group_by_pair(&star_a, &star_b)
                .unwrap_or_else(|e| fail(e));
            let group = data.charts.group(gid).unwrap_or_else(|e| fail(e));
            if group.kind.is_empty() {
                println!("GroupID: {gid}");
            } else {
                println!("GroupID: {gid} ({})", group.kind);
            }
            for (house, stars) in group.houses.iter() {
                println!("{:<5} {}", house.name(), stars.join(", "));
            }
        }

        Commands::Stars => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);
            for star in data.charts.main_stars() {
                println!("{star}");
            }
        }

        Commands::Transforms { stem } => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);
            let stem = require_stem(&stem);
            let row = data.transforms.assignments(stem).unwrap_or_else(|e| fail(e));
            for (category, star) in row.iter() {
                let star = if star.is_empty() { "-" } else { star.as_str() };
                println!("{:<10} {star}", category.name());
            }
        }

        Commands::StarCategories { star } => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);
            let categories = data.transforms.categories_for_star(&star);
            if categories.is_empty() {
                println!("{star}: -");
            } else {
                let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
                println!("{star}: {}", names.join(", "));
            }
        }

        Commands::ActiveMonth { date, timezone } => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);
            let date = require_date(&date);
            let m = data
                .solar_terms
                .active_month(&timezone, date, &config.solar_term_config())
                .unwrap_or_else(|e| fail(e));
            println!(
                "Tháng {} ({}), start {}, day {}{}",
                m.month_branch,
                m.term.key(),
                m.start_date,
                m.day_index,
                if m.is_fallback { " [fallback]" } else { "" }
            );
            if let Ok(stem) = data.calendar.year_stem(date) {
                let label = month_label_for_branch(m.month_branch, &solar_months(stem));
                println!("Can năm: {stem}, tháng: {label}");
            }
        }

        Commands::MonthOptions { date } => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);
            let opts = month_options(&data, require_date(&date)).unwrap_or_else(|e| fail(e));
            for label in opts {
                println!("{label}");
            }
        }

        Commands::Reading {
            date,
            timezone,
            group,
            stars,
            anchor,
            ta_phu,
            huu_bat,
            van_xuong,
            van_khuc,
        } => {
            let config = load_config(cli.config.as_ref(), cli.cutoff_hour);
            let data = load_data(&config);

            let group_id = match (group, stars) {
                (Some(id), _) => id,
                (None, Some(pair)) => {
                    let (a, b) = parse_star_pair(&pair).unwrap_or_else(|e| fail(e));
                    data.charts.find_group_by_pair(&a, &b).unwrap_or_else(|e| fail(e))
                }
                (None, None) => fail("either --group or --stars is required"),
            };
            debug!(group_id, "chart group selected");

            let placement = ExtraStarPlacement::from_names([
                ta_phu.as_str(),
                huu_bat.as_str(),
                van_xuong.as_str(),
                van_khuc.as_str(),
            ])
            .unwrap_or_else(|e| fail(e));
            let query = ReadingQuery {
                group_id,
                placement,
                date: require_date(&date),
                timezone,
                anchor: require_label(&anchor),
            };
            let reading = compute_reading(&data, &query, &config).unwrap_or_else(|e| fail(e));
            print_reading(&reading);
        }
    }
}
