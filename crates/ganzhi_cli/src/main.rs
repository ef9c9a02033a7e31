mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ganzhi_base::{
    Gender, Pillar, SolarTermInstant, is_lunar_year_covered, is_solar_term_year_covered,
    leap_month, lunar_year_days, solar_terms_for_year, to_gregorian, to_lunisolar,
    year_pillar_for,
};
use ganzhi_chart::{BirthChart, BirthDescriptor, CalendarType, age_on, chart_for_birth};
use ganzhi_time::{CivilDate, CivilTime, UtcOffset};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four-pillar charts, solar terms and lunisolar dates")]
struct Cli {
    /// Offset of the local clock, e.g. +08:00 (default +08:00)
    #[arg(long, global = true)]
    offset: Option<String>,
    /// TOML config file (utc_offset, start_age_rule)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart: four pillars and luck cycle
    Chart {
        /// Birth date YYYY-MM-DD (lunar month/day with --lunar)
        date: String,
        /// Local birth time hh:mm
        time: String,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Date is a lunisolar date
        #[arg(long)]
        lunar: bool,
        /// Lunisolar date is in the leap month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// Reference date YYYY-MM-DD for the current luck segment
        #[arg(long)]
        on: Option<String>,
    },
    /// Four pillars of a local date-time
    Pillars {
        /// Local time YYYY-MM-DDThh:mm[:ss]
        datetime: String,
    },
    /// The 24 solar terms of a Gregorian year
    SolarTerms {
        year: i32,
    },
    /// Convert a Gregorian date to the lunisolar calendar
    ToLunar {
        /// Gregorian date YYYY-MM-DD
        date: String,
    },
    /// Convert a lunisolar date to the Gregorian calendar
    ToSolar {
        year: i32,
        month: u8,
        day: u8,
        /// Date is in the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Year pillar of an astrological year
    YearPillar {
        year: i32,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

/// Split `YYYY-MM-DD` into numbers without calendar validation.
fn parse_ymd(s: &str) -> Result<(i32, u32, u32), String> {
    let bad = || format!("Invalid date '{s}' (expected YYYY-MM-DD)");
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let mut parts = body.splitn(3, '-');
    let mut next = || parts.next().ok_or_else(bad);
    let year: i32 = next()?.parse().map_err(|_| bad())?;
    let month: u32 = next()?.parse().map_err(|_| bad())?;
    let day: u32 = next()?.parse().map_err(|_| bad())?;
    Ok((sign * year, month, day))
}

/// Parse `hh:mm` into hour and minute.
fn parse_hm(s: &str) -> Result<(u32, u32), String> {
    let bad = || format!("Invalid time '{s}' (expected hh:mm)");
    let (h, m) = s.split_once(':').ok_or_else(bad)?;
    Ok((h.parse().map_err(|_| bad())?, m.parse().map_err(|_| bad())?))
}

fn parse_date(s: &str) -> Result<CivilDate, String> {
    s.parse::<CivilDate>()
        .map_err(|e| format!("Invalid date '{s}': {e}"))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn pillar_line(label: &str, p: &Pillar) -> String {
    format!(
        "{label:<6} {:<10} {}  {} {} / {} {}",
        p.to_string(),
        p.hanja(),
        p.stem().polarity().name(),
        p.stem().element().name(),
        p.branch().animal(),
        p.branch().element().name(),
    )
}

fn print_chart(chart: &BirthChart) {
    println!("Birth:      {} ({})", chart.birth, chart.utc_offset);
    println!("Instant:    {}", chart.instant);
    println!("Lunisolar:  {}", chart.lunisolar);
    println!(
        "Solar month {} opened by {} at {}",
        chart.solar_month.index,
        chart.solar_month.opened_by.term.name(),
        chart.solar_month.opened_by.instant
    );
    println!();
    let p = &chart.pillars;
    println!("{}", pillar_line("Year", &p.year));
    println!("{}", pillar_line("Month", &p.month));
    println!("{}", pillar_line("Day", &p.day));
    println!("{}", pillar_line("Hour", &p.hour));
    println!("Day master: {}", p.day_master().name());
    println!();

    let luck = &chart.luck;
    println!(
        "Luck cycle: {} from age {} ({:.2} days to {})",
        luck.direction.name(),
        luck.starting_age,
        luck.days_to_boundary,
        luck.boundary.term.name()
    );
    for (i, seg) in luck.segments.iter().enumerate() {
        let marker = if luck.current_segment_index == Some(i) { " <- current" } else { "" };
        println!("  {}. {}{marker}", seg.order, seg);
    }
    if chart.is_approximate() {
        println!();
        println!("Note: outside the reference tables; calendar data is approximate.");
    }
}

fn print_terms(year: i32, terms: &[SolarTermInstant], offset: UtcOffset) {
    let note = if is_solar_term_year_covered(year) { "" } else { " (approximate)" };
    println!("Solar terms {year}{note}, local time {offset}:");
    for t in terms {
        let marker = if t.term.is_sectional() { "*" } else { " " };
        println!(
            "{marker} {:<12} {:<22} {:>3} deg  {}",
            t.term.name(),
            t.term.english_name(),
            t.term.longitude_deg(),
            t.instant.to_civil(offset)
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = config::resolve(cli.config.as_deref(), cli.offset.as_deref())
        .unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            lunar,
            leap,
            on,
        } => {
            let (year, month, day) = parse_ymd(&date).unwrap_or_else(|e| fail(e));
            let (hour, minute) = parse_hm(&time).unwrap_or_else(|e| fail(e));
            let desc = BirthDescriptor {
                year,
                month,
                day,
                hour,
                minute: Some(minute),
                calendar: if lunar { CalendarType::Lunar } else { CalendarType::Solar },
                is_leap_month: leap,
                gender,
            };
            // Age is needed before the chart, so resolve the birth date first.
            let current_age = match on {
                Some(on) => {
                    let on = parse_date(&on).unwrap_or_else(|e| fail(e));
                    let birth =
                        ganzhi_chart::normalize_birth(&desc).unwrap_or_else(|e| fail(e));
                    age_on(birth.date(), on)
                }
                None => None,
            };
            let chart = chart_for_birth(&desc, &config, current_age).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Pillars { datetime } => {
            let time: CivilTime = datetime
                .parse()
                .unwrap_or_else(|e| fail(format!("Invalid date-time '{datetime}': {e}")));
            let chart =
                ganzhi_base::four_pillars(&time, config.utc_offset).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&chart);
            } else {
                println!("{chart}");
            }
        }

        Commands::SolarTerms { year } => {
            let terms = solar_terms_for_year(year);
            if cli.json {
                print_json(&terms);
            } else {
                print_terms(year, &terms, config.utc_offset);
            }
        }

        Commands::ToLunar { date } => {
            let date = parse_date(&date).unwrap_or_else(|e| fail(e));
            let lunar = to_lunisolar(date).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&lunar);
            } else {
                println!("{lunar}");
                match leap_month(lunar.year) {
                    Some(m) => println!("Year {} has leap month {m}", lunar.year),
                    None => println!("Year {} has no leap month", lunar.year),
                }
                println!("Year length: {} days", lunar_year_days(lunar.year));
            }
        }

        Commands::ToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let date = to_gregorian(year, month, day, leap).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&date);
            } else if is_lunar_year_covered(year) {
                println!("{date}");
            } else {
                println!("{date} (approximate)");
            }
        }

        Commands::YearPillar { year } => {
            let pillar = year_pillar_for(year);
            if cli.json {
                print_json(&pillar);
            } else {
                println!("{}", pillar_line(&year.to_string(), &pillar));
            }
        }
    }
}
