use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use log::debug;
use panchang_ephem::AnalyticEphemeris;
use panchang_service::{BoundaryMode, DailyPanchang, Location, PanchangConfig, PanchangService};
use panchang_time::{Tz, utc_midnight};
use panchang_vedic::{nakshatra_from_longitude, tithi_from_elongation};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "panchang", about = "Hindu panchang calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, default_value_t = 28.6139, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, default_value_t = 77.2090, allow_hyphen_values = true)]
    lon: f64,
    /// IANA timezone for displayed times and fixed fallbacks
    #[arg(long, default_value = "Asia/Kolkata")]
    tz: String,
    /// Place name
    #[arg(long, default_value = "New Delhi")]
    name: String,
}

#[derive(Args)]
struct CalcArgs {
    /// Solve for exact element start/end times
    #[arg(long)]
    exact: bool,
    /// Rise/set search window in days
    #[arg(long, default_value_t = 1.0)]
    search_window_days: f64,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for one day
    Daily {
        /// Date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Tithi, nakshatra and festivals for every day of a month
    Month {
        year: i32,
        month: u32,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Festivals of a month
    Festivals {
        year: i32,
        month: u32,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Rise/set and element-start events around a date
    Timeline {
        /// Center date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
        /// Days before and after the center date
        #[arg(long, default_value_t = 1)]
        days: u32,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Tithi from Moon−Sun elongation
    Tithi {
        /// Elongation in degrees
        #[arg(allow_hyphen_values = true)]
        elongation: f64,
    },
    /// Nakshatra from Moon longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_date(s: Option<&str>) -> DateTime<Utc> {
    match s {
        None => Utc::now(),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(utc_midnight)
            .unwrap_or_else(|e| fail(format!("Invalid date '{s}' (expected YYYY-MM-DD): {e}"))),
    }
}

fn location(args: LocationArgs) -> Location {
    Location::new(args.lat, args.lon, args.tz, args.name).unwrap_or_else(|e| fail(e))
}

fn service(calc: &CalcArgs) -> PanchangService<AnalyticEphemeris> {
    let mode = if calc.exact {
        BoundaryMode::Exact
    } else {
        BoundaryMode::Approximate
    };
    let ephemeris = AnalyticEphemeris::new().with_search_window_days(calc.search_window_days);
    debug!("search window {} d, {mode:?} boundaries", ephemeris.search_window_days());
    PanchangService::with_config(ephemeris, PanchangConfig::default().with_boundary_mode(mode))
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

fn hm(t: DateTime<Utc>, tz: Tz) -> String {
    t.with_timezone(&tz).format("%H:%M").to_string()
}

fn ymd_hm(t: DateTime<Utc>, tz: Tz) -> String {
    t.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string()
}

fn mark(fallback: bool) -> &'static str {
    if fallback { " (fallback)" } else { "" }
}

fn print_daily(p: &DailyPanchang, loc: &Location) {
    let tz = loc.tz();
    let a = &p.astronomical;
    let s = &a.sources;
    println!("Panchang for {} at {} ({})", p.calendar_date(), loc.name, tz.name());
    println!();
    println!(
        "Tithi:      {} {} ({}){}  {} -> {}",
        p.tithi.paksha.name(),
        p.tithi.name,
        p.tithi.number,
        mark(p.tithi.source.is_fallback()),
        ymd_hm(p.tithi.start, tz),
        ymd_hm(p.tithi.end, tz)
    );
    let pada = p.nakshatra.pada.map(|n| format!(" pada {n}")).unwrap_or_default();
    println!(
        "Nakshatra:  {} ({}){pada}, ruler {}, deity {}{}  {} -> {}",
        p.nakshatra.name,
        p.nakshatra.number,
        p.nakshatra.ruler,
        p.nakshatra.deity,
        mark(p.nakshatra.source.is_fallback()),
        ymd_hm(p.nakshatra.start, tz),
        ymd_hm(p.nakshatra.end, tz)
    );
    println!(
        "Yoga:       {} ({}){}  {} -> {}",
        p.yoga.name,
        p.yoga.number,
        mark(p.yoga.source.is_fallback()),
        ymd_hm(p.yoga.start, tz),
        ymd_hm(p.yoga.end, tz)
    );
    println!(
        "Karana:     {} ({}, #{} of 60){}  {} -> {}",
        p.karana.name,
        p.karana.number,
        p.karana.sequence,
        mark(p.karana.source.is_fallback()),
        ymd_hm(p.karana.start, tz),
        ymd_hm(p.karana.end, tz)
    );
    println!();
    println!("Sunrise:    {}{}", hm(a.sunrise, tz), mark(s.sunrise.is_fallback()));
    println!("Sunset:     {}{}", hm(a.sunset, tz), mark(s.sunset.is_fallback()));
    println!("Moonrise:   {}{}", hm(a.moonrise, tz), mark(s.moonrise.is_fallback()));
    println!("Moonset:    {}{}", hm(a.moonset, tz), mark(s.moonset.is_fallback()));
    println!(
        "Moon phase: {} ({:.1}%){}",
        a.phase_name().name(),
        a.lunar_phase * 100.0,
        mark(s.lunar_phase.is_fallback())
    );
    println!();
    println!("Muhurtas:");
    for (i, m) in p.muhurtas.iter().enumerate() {
        println!(
            "  {:2}. {:<14} {} -> {}  {:<12} {}",
            i + 1,
            m.name,
            hm(m.start, tz),
            hm(m.end, tz),
            m.kind.name(),
            m.description
        );
    }
    if !p.festivals.is_empty() {
        println!();
        println!("Festivals:");
        for f in &p.festivals {
            println!("  {} [{}] - {}", f.name, f.kind.name(), f.description);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Daily {
            date,
            location: loc_args,
            calc,
        } => {
            let loc = location(loc_args);
            let p = service(&calc)
                .calculate_daily_panchang(parse_date(date.as_deref()), &loc)
                .unwrap_or_else(|e| fail(e));
            if calc.json {
                print_json(&p);
            } else {
                print_daily(&p, &loc);
            }
        }

        Commands::Month {
            year,
            month,
            location: loc_args,
            calc,
        } => {
            let loc = location(loc_args);
            let days = service(&calc)
                .calculate_month(year, month, &loc)
                .unwrap_or_else(|e| fail(e));
            if calc.json {
                print_json(&days);
                return;
            }
            let tz = loc.tz();
            for p in &days {
                let festivals: Vec<&str> = p.festivals.iter().map(|f| f.name).collect();
                println!(
                    "{}  {:<8} {:<18} {:<18} {:<16} rise {} set {}  {}",
                    p.calendar_date(),
                    p.tithi.paksha.name(),
                    p.tithi.name,
                    p.nakshatra.name,
                    p.astronomical.phase_name().name(),
                    hm(p.astronomical.sunrise, tz),
                    hm(p.astronomical.sunset, tz),
                    festivals.join(", ")
                );
            }
        }

        Commands::Festivals {
            year,
            month,
            location: loc_args,
            calc,
        } => {
            let loc = location(loc_args);
            let festivals = service(&calc)
                .festivals_in_month(year, month, &loc)
                .unwrap_or_else(|e| fail(e));
            if calc.json {
                print_json(&festivals);
                return;
            }
            if festivals.is_empty() {
                println!("No festivals in {year}-{month:02}");
            }
            for f in &festivals {
                println!(
                    "{}  {} [{}] - {}. {}",
                    f.date,
                    f.name,
                    f.kind.name(),
                    f.description,
                    f.significance
                );
            }
        }

        Commands::Timeline {
            date,
            days,
            location: loc_args,
            calc,
        } => {
            let loc = location(loc_args);
            let events = service(&calc)
                .timeline(parse_date(date.as_deref()), &loc, days)
                .unwrap_or_else(|e| fail(e));
            if calc.json {
                print_json(&events);
                return;
            }
            let tz = loc.tz();
            for e in &events {
                let desc = e.description.as_deref().unwrap_or("");
                println!(
                    "{}  {:<10} {:<20} {desc}",
                    ymd_hm(e.time, tz),
                    e.kind.name(),
                    e.name
                );
            }
        }

        Commands::Tithi { elongation } => {
            let t = tithi_from_elongation(elongation);
            println!(
                "{} {} (tithi {}) - {:.4} deg in tithi ({:.0}..{:.0})",
                t.paksha.name(),
                t.name,
                t.number,
                t.degrees_in_tithi,
                t.start_elongation(),
                t.end_elongation()
            );
        }

        Commands::Nakshatra { lon } => {
            let n = nakshatra_from_longitude(lon);
            println!(
                "{} (number {}) - Pada {}, ruler {}, deity {} ({:.4} deg in nakshatra)",
                n.nakshatra.name(),
                n.number,
                n.pada,
                n.nakshatra.ruler(),
                n.nakshatra.deity(),
                n.degrees_in_nakshatra
            );
        }
    }
}
