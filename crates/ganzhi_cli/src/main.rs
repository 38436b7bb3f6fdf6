use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use ganzhi_config::{CliOverrides, GanzhiConfig};
use ganzhi_rs::{
    BirthInput, ChartEngine, GeoLocation, Gender, HourBasis, SolarTermTable, init_tracing,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ganzhi", about = "BaZi and ZiWei Doushu chart CLI")]
struct Cli {
    /// Config file (default: ./ganzhi.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: Format,
    /// Tracing filter (overrides [logging] filter)
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(clap::Args)]
struct BirthArgs {
    /// Local birth time (YYYY-MM-DDThh:mm[:ss])
    #[arg(long)]
    date: String,
    /// IANA time zone (default: [location] timezone)
    #[arg(long)]
    tz: Option<String>,
    /// male / female
    #[arg(long, default_value = "male")]
    gender: String,
    /// Longitude in degrees east (default: [location] longitude)
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Latitude in degrees north (default: [location] latitude)
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, five elements, ten gods and luck start
    Bazi {
        #[command(flatten)]
        birth: BirthArgs,
        /// Hour pillar basis: utc (default) or civil
        #[arg(long)]
        hour_basis: Option<String>,
        /// Algorithm version (default: [bazi] default_version)
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// ZiWei Doushu chart, major limits and annual fortune
    Ziwei {
        #[command(flatten)]
        birth: BirthArgs,
        /// Year for the annual fortune (default: birth year)
        #[arg(long)]
        year: Option<i32>,
        /// Algorithm version (default: [ziwei] default_version)
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// The 24 solar terms of a year
    Terms {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// Skip refinement against solar longitude
        #[arg(long)]
        estimated: bool,
    },
    /// True solar time of a civil instant
    SolarTime {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Gregorian to Chinese lunar date
    Lunar {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_local(s: &str) -> NaiveDateTime {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .unwrap_or_else(|| fail(format!("Invalid date-time '{s}' (expected YYYY-MM-DDThh:mm)")))
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap_or_else(|_| fail(format!("Invalid date '{s}' (expected YYYY-MM-DD)")))
}

fn birth_input(args: &BirthArgs, config: &GanzhiConfig) -> BirthInput {
    let gender: Gender = args.gender.parse().unwrap_or_else(|e| fail(e));
    let tz = args
        .tz
        .clone()
        .unwrap_or_else(|| config.location.timezone.clone());
    let location = GeoLocation::new(
        args.lon.unwrap_or(config.location.longitude),
        args.lat.unwrap_or(config.location.latitude),
    );
    BirthInput::new(parse_local(&args.date), tz, gender).with_location(location)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

fn print_terms(table: &SolarTermTable) {
    println!("{} 年二十四节气 (UTC)", table.year);
    for e in table.chronological() {
        let when = e
            .utc()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| format!("JD {:.5}", e.jd_ut));
        println!(
            "  {}{} {:>5.1}°  {}  [{:?}]",
            e.term.name(),
            if e.term.is_node() { "*" } else { " " },
            e.term.longitude_deg(),
            when,
            e.source
        );
    }
}

fn main() {
    let cli = Cli::parse();

    let hour_basis = match &cli.command {
        Commands::Bazi {
            hour_basis: Some(b),
            ..
        } => Some(b.parse::<HourBasis>().unwrap_or_else(|e| fail(e))),
        _ => None,
    };
    let overrides = CliOverrides {
        hour_basis,
        refine: match &cli.command {
            Commands::Terms { estimated: true, .. } => Some(false),
            _ => None,
        },
        log_filter: cli.log.clone(),
        ..Default::default()
    };
    let config = GanzhiConfig::load(cli.config.as_deref(), Some(&overrides))
        .unwrap_or_else(|e| fail(format!("Failed to load config: {e}")));
    init_tracing(&config.logging.filter);
    debug!(?config, "ganzhi cli starting");

    let engine = ChartEngine::new(config.clone())
        .unwrap_or_else(|e| fail(format!("Failed to create engine: {e}")));

    match cli.command {
        Commands::Bazi {
            birth, algorithm, ..
        } => {
            let input = birth_input(&birth, &config);
            let version = algorithm.unwrap_or_else(|| config.bazi.default_version.clone());
            let report = engine
                .compute_bazi_with(&input, &version)
                .unwrap_or_else(|e| fail(e));
            match cli.format {
                Format::Json => print_json(&report),
                Format::Text => print!("{report}"),
            }
        }

        Commands::Ziwei {
            birth,
            year,
            algorithm,
        } => {
            let input = birth_input(&birth, &config);
            let version = algorithm.unwrap_or_else(|| config.ziwei.default_version.clone());
            let report = engine
                .compute_ziwei_with(&input, year, &version)
                .unwrap_or_else(|e| fail(e));
            match cli.format {
                Format::Json => print_json(&report),
                Format::Text => print!("{report}"),
            }
        }

        Commands::Terms { year, .. } => {
            let table = engine.solar_terms(year);
            match cli.format {
                Format::Json => print_json(&table),
                Format::Text => print_terms(&table),
            }
        }

        Commands::SolarTime { birth } => {
            let input = birth_input(&birth, &config);
            let tst = engine.true_solar_time(&input).unwrap_or_else(|e| fail(e));
            match cli.format {
                Format::Json => print_json(&tst),
                Format::Text => {
                    println!("Civil:      {}", tst.civil);
                    println!("UTC:        {}", tst.utc.format("%Y-%m-%d %H:%M:%S"));
                    println!("Offset:     {:+.2} min", tst.longitude_offset_minutes);
                    println!(
                        "Meridian:   {:+.2} min (zone meridian {:.1}°)",
                        tst.longitude_correction_minutes, tst.reference_meridian_deg
                    );
                    println!("EoT:        {:+.2} min", tst.equation_of_time_minutes);
                    println!("Solar:      {}", tst.solar.format("%Y-%m-%d %H:%M:%S"));
                }
            }
        }

        Commands::Lunar { date } => {
            let lunar = engine
                .lunar_date(parse_date(&date))
                .unwrap_or_else(|e| fail(e));
            match cli.format {
                Format::Json => print_json(&lunar),
                Format::Text => println!(
                    "农历 {}年 {}{}月 {}日",
                    lunar.year,
                    if lunar.is_leap { "闰" } else { "" },
                    lunar.month,
                    lunar.day
                ),
            }
        }
    }
}
