//! holidays - look up public holidays and working days from the command line.
//!
//! Usage:
//!
//! ```text
//! holidays list <year> [country]
//! holidays check <YYYY-MM-DD> [country] [--text]
//! holidays next <YYYY-MM-DD> [country]
//! holidays between <start> <end> [country]
//! ```
//!
//! The country defaults to `HOLIDAY_DEFAULT_COUNTRY` (or `IN`).

use std::io;

use anyhow::{Context, Result};
use holidaycache_core::calendar::{parse_date, parse_year};
use holidaycache_core::{Config, CountryCode, HolidayService};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "\
Usage:
  holidays list <year> [country]
  holidays check <YYYY-MM-DD> [country] [--text]
  holidays next <YYYY-MM-DD> [country]
  holidays between <start> <end> [country]";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let text_output = raw_args.iter().any(|a| a == "--text");
    let args: Vec<String> = raw_args.into_iter().filter(|a| a != "--text").collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let config = Config::load().context("Failed to load configuration")?;
    let service = HolidayService::from_config(&config).context("Failed to build holiday API client")?;
    info!(base_url = %config.api_base_url, country = %service.default_country(), "holidays starting");

    let country_arg = |index: usize| {
        args.get(index)
            .map(|c| CountryCode::new(c))
            .unwrap_or_else(|| service.default_country().clone())
    };

    match command.as_str() {
        "list" => {
            let year = parse_year(arg(&args, 1, "year")?)?;
            let country = country_arg(2);
            let holidays = service.get_holidays(year, &country).await;
            if let Some(entry) = service.cached_entry(year, &country) {
                let age = service.cache_age(year, &country).unwrap_or_default();
                debug!(source = ?entry.source, age = %age, "Holiday list served");
            }
            println!("{}", serde_json::to_string_pretty(&holidays)?);
        }
        "check" => {
            let date = parse_date(arg(&args, 1, "date")?)?;
            let status = service.day_status(date, &country_arg(2)).await;
            if text_output {
                println!("{}", status.summary());
            } else {
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
        }
        "next" => {
            let date = parse_date(arg(&args, 1, "date")?)?;
            match service.next_working_day(date, &country_arg(2)).await {
                Some(next) => println!("{}", next),
                None => anyhow::bail!("No working day found within a year of {}", date),
            }
        }
        "between" => {
            let start = parse_date(arg(&args, 1, "start date")?)?;
            let end = parse_date(arg(&args, 2, "end date")?)?;
            let count = service.working_days_between(start, end, &country_arg(3)).await;
            println!("{}", count);
        }
        "help" | "--help" | "-h" => println!("{}", USAGE),
        other => {
            eprintln!("Unknown command '{}'\n\n{}", other, USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing {}\n\n{}", name, USAGE))
}
