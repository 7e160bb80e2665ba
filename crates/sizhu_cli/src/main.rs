use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sizhu_rs::{
    CONFIG_TEMPLATE, ChartEngine, ChartInput, ChartOptions, CivilDateTime, FourPillarChart,
    Gender, LunarDate, ReverseSearchConfig, Resolved, SizhuConfig, UNKNOWN, nayin_element_for,
    nayin_name_for,
};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser)]
#[command(name = "sizhu", about = "Four Pillars (八字) charts, lunar dates and solar terms")]
struct Cli {
    /// TOML configuration file (see `sizhu config-template`)
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
    /// Full birth chart for a civil moment, a lunar date, or explicit pillars
    Chart {
        /// Civil birth moment "YYYY-MM-DD HH:MM"
        #[arg(long, conflicts_with_all = ["lunar", "pillars"])]
        date: Option<String>,
        /// Lunar birth date "YYYY-MM-DD" (use --leap for a leap month)
        #[arg(long, conflicts_with = "pillars")]
        lunar: Option<String>,
        /// The lunar month is the leap month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// Clock time "HH:MM" for --lunar
        #[arg(long, default_value = "00:00", requires = "lunar")]
        time: String,
        /// Four pillars "甲子 丙寅 戊辰 庚申"; no calendar is consulted
        #[arg(long)]
        pillars: Option<String>,
        /// male | female
        #[arg(long, default_value = "male")]
        gender: Gender,
        /// First year of the annual pillar list (defaults to the birth year)
        #[arg(long)]
        liunian_start: Option<i32>,
        /// Skip the decade and annual fortune
        #[arg(long)]
        no_fortune: bool,
    },
    /// Civil date to lunar date
    Lunar {
        /// Civil moment "YYYY-MM-DD HH:MM" or date "YYYY-MM-DD"
        date: String,
    },
    /// Lunar date to civil date
    Solar {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u8,
        #[arg(long)]
        day: u8,
        /// The month is the leap month
        #[arg(long)]
        leap: bool,
    },
    /// Solar terms around a civil moment
    Jieqi {
        /// Civil moment "YYYY-MM-DD HH:MM"
        date: String,
    },
    /// Find civil moments whose chart matches four pillars
    Reverse {
        /// Four pillars "甲子 丙寅 戊辰 庚申"
        pillars: String,
        /// First civil year to scan
        #[arg(long)]
        start: Option<i32>,
        /// Last civil year to scan
        #[arg(long)]
        end: Option<i32>,
    },
    /// Nayin (纳音) of a stem and branch
    Nayin {
        /// Heavenly stem glyph, e.g. 甲
        stem: String,
        /// Earthly branch glyph, e.g. 子
        branch: String,
    },
    /// Print a commented configuration template
    ConfigTemplate,
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> SizhuConfig {
    let Some(path) = path else {
        return SizhuConfig::default();
    };
    SizhuConfig::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn load_engine(config: &SizhuConfig) -> ChartEngine {
    ChartEngine::from_config(config).unwrap_or_else(|e| {
        eprintln!("Failed to build engine: {e}");
        std::process::exit(1);
    })
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn parse_moment(s: &str) -> CivilDateTime {
    or_exit(s.parse::<CivilDateTime>(), "Invalid date")
}

fn parse_lunar(s: &str, leap: bool) -> LunarDate {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        eprintln!("Invalid lunar date: expected YYYY-MM-DD, got {s}");
        std::process::exit(1);
    }
    let year: i32 = or_exit(parts[0].parse(), "Invalid lunar year");
    let month: u8 = or_exit(parts[1].parse(), "Invalid lunar month");
    let day: u8 = or_exit(parts[2].parse(), "Invalid lunar day");
    or_exit(LunarDate::new(year, month, leap, day), "Invalid lunar date")
}

fn parse_clock(s: &str) -> (u32, u32) {
    let Some((h, m)) = s.trim().split_once(':') else {
        eprintln!("Invalid time: expected HH:MM, got {s}");
        std::process::exit(1);
    };
    (
        or_exit(h.parse(), "Invalid hour"),
        or_exit(m.parse(), "Invalid minute"),
    )
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value), "Serialization failed"));
}

fn print_provenance<T>(resolved: &Resolved<T>) {
    if let Some(reason) = &resolved.fallback_reason {
        eprintln!("note: answered by fallback ({reason})");
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    init_logging(&config.logging.filter);
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "configuration loaded");
    }

    match cli.command {
        Commands::Chart {
            date,
            lunar,
            leap,
            time,
            pillars,
            gender,
            liunian_start,
            no_fortune,
        } => {
            let input = if let Some(date) = date {
                ChartInput::Moment {
                    moment: parse_moment(&date),
                    gender,
                }
            } else if let Some(lunar) = lunar {
                let (hour, minute) = parse_clock(&time);
                ChartInput::Lunar {
                    date: parse_lunar(&lunar, leap),
                    hour,
                    minute,
                    gender,
                }
            } else if let Some(pillars) = pillars {
                ChartInput::Manual(or_exit(pillars.parse::<FourPillarChart>(), "Invalid pillars"))
            } else {
                eprintln!("One of --date, --lunar or --pillars is required");
                std::process::exit(1);
            };
            let options = ChartOptions {
                include_fortune: !no_fortune,
                liunian_start,
                ..ChartOptions::default()
            };
            let engine = load_engine(&config);
            let report = or_exit(engine.chart(&input, &options), "Chart failed");
            if cli.json {
                print_json(&report);
            } else {
                print!("{}", render::chart_report(&report));
            }
        }

        Commands::Lunar { date } => {
            let moment = parse_moment(&date);
            let engine = load_engine(&config);
            let resolved = or_exit(engine.civil_to_lunar(&moment), "Conversion failed");
            print_provenance(&resolved);
            if cli.json {
                print_json(&resolved);
            } else {
                let snapshot = resolved.value;
                println!("{} -> {}", moment, snapshot.date);
                println!("四柱: {}", snapshot.pillars);
            }
        }

        Commands::Solar {
            year,
            month,
            day,
            leap,
        } => {
            let date = or_exit(LunarDate::new(year, month, leap, day), "Invalid lunar date");
            let engine = load_engine(&config);
            let resolved = or_exit(engine.lunar_to_civil(&date), "Conversion failed");
            print_provenance(&resolved);
            if cli.json {
                print_json(&resolved);
            } else {
                println!("{} -> {}", date, resolved.value);
            }
        }

        Commands::Jieqi { date } => {
            let moment = parse_moment(&date);
            let engine = load_engine(&config);
            let resolved = or_exit(engine.jieqi(&moment), "Solar term lookup failed");
            print_provenance(&resolved);
            if cli.json {
                print_json(&resolved);
            } else {
                for line in resolved.value.describe() {
                    println!("{line}");
                }
            }
        }

        Commands::Reverse {
            pillars,
            start,
            end,
        } => {
            let target = or_exit(pillars.parse::<FourPillarChart>(), "Invalid pillars");
            let engine = load_engine(&config);
            let explicit = (start.is_some() || end.is_some()).then(|| {
                let defaults = config.reverse_config();
                ReverseSearchConfig {
                    start_year: start.unwrap_or(defaults.start_year),
                    end_year: end.unwrap_or(defaults.end_year),
                    ..defaults
                }
            });
            let resolved = or_exit(
                engine.reverse_search(target, explicit, None),
                "Reverse search failed",
            );
            print_provenance(&resolved);
            if cli.json {
                print_json(&resolved);
            } else if resolved.value.is_empty() {
                println!("No matching moments for {target}");
            } else {
                for m in &resolved.value {
                    match &m.lunar_text {
                        Some(lunar) => println!("{}  {}", m.solar_text, lunar),
                        None => println!("{}", m.solar_text),
                    }
                }
            }
        }

        Commands::Nayin { stem, branch } => {
            let name = nayin_name_for(&stem, &branch);
            if name == UNKNOWN {
                eprintln!("Unknown stem/branch pair: {stem}{branch}");
                std::process::exit(1);
            }
            let element = nayin_element_for(name);
            if cli.json {
                print_json(&serde_json::json!({ "nayin": name, "element": element }));
            } else {
                println!("{stem}{branch}: {name} ({element})");
            }
        }

        Commands::ConfigTemplate => print!("{CONFIG_TEMPLATE}"),
    }
}
