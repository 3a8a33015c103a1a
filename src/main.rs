use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dining::{
    config::{self, Config, DurationRange},
    dinner::Dinner,
};

#[derive(Parser)]
#[command(name = "dining")]
#[command(version)]
#[command(about = "Dining philosophers without deadlock")]
struct Cli {
    /// Number of philosophers around the table
    #[arg(short = 'n', long, env = "DINING_PHILOSOPHERS", default_value_t = config::NUMBER_OF_PHILOSOPHERS)]
    philosophers: usize,

    /// Meals each philosopher eats before leaving
    #[arg(long, env = "DINING_MEALS", default_value_t = config::MEALS)]
    meals: usize,

    /// Shortest think time (milliseconds)
    #[arg(long, env = "DINING_THINK_MIN_MS", default_value_t = millis(config::THINK_TIME.min))]
    think_min_ms: u64,

    /// Longest think time (milliseconds)
    #[arg(long, env = "DINING_THINK_MAX_MS", default_value_t = millis(config::THINK_TIME.max))]
    think_max_ms: u64,

    /// Shortest eat time (milliseconds)
    #[arg(long, env = "DINING_EAT_MIN_MS", default_value_t = millis(config::EAT_TIME.min))]
    eat_min_ms: u64,

    /// Longest eat time (milliseconds)
    #[arg(long, env = "DINING_EAT_MAX_MS", default_value_t = millis(config::EAT_TIME.max))]
    eat_max_ms: u64,

    /// Seconds between progress reports
    #[arg(long, env = "DINING_REPORT_INTERVAL_SECS", default_value_t = config::PROGRESS_REPORT_INTERVAL.as_secs())]
    report_interval_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn millis(d: Duration) -> u64 {
    d.as_millis() as u64
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            philosophers: cli.philosophers,
            meals: cli.meals,
            think_time: DurationRange::from_millis(cli.think_min_ms, cli.think_max_ms),
            eat_time: DurationRange::from_millis(cli.eat_min_ms, cli.eat_max_ms),
            report_interval: Duration::from_secs(cli.report_interval_secs),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let meals = Dinner::new(Config::from(&cli)).run()?;
    info!(total = meals.iter().sum::<usize>(), "dinner is over");
    println!("Finished program");
    Ok(())
}
