mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use open_hours::week::format_week_second;
use open_hours::{load_schedule_set, ScheduleSet};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, DEFAULT_LOG_FILTER};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let schedules = load_schedule_set(&cli.data)
        .with_context(|| format!("failed to load schedules from {}", cli.data.display()))?;
    info!(
        businesses = schedules.len(),
        path = %cli.data.display(),
        "schedules loaded"
    );

    if cli.intervals {
        return print_intervals(&schedules, cli.json);
    }

    let instant = cli.query_instant()?;
    debug!(
        weekday = ?instant.weekday(),
        week_second = instant.week_second(),
        at = %format_week_second(instant.week_second()),
        "querying"
    );

    let open = schedules.open_at(instant);
    info!(open = open.len(), "query complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&open)?);
    } else {
        for name in &open {
            println!("{name}");
        }
    }
    Ok(())
}

fn print_intervals(schedules: &ScheduleSet, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(schedules.businesses())?);
        return Ok(());
    }
    for business in schedules.businesses() {
        println!("{}", business.name);
        for interval in &business.intervals {
            println!(
                "  {} - {}  [{}, {})",
                format_week_second(interval.start),
                format_week_second(interval.end),
                interval.start,
                interval.end
            );
        }
    }
    Ok(())
}
