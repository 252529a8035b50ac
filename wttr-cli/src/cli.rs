use std::io::{self, Write};

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use wttr_core::{Config, Location, WeatherSource, source_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather and today's forecast from wttr.in")]
pub struct Cli {
    /// City or place name. Falls back to $WEATHER_LOCATION, then London.
    pub city: Option<String>,

    /// Print without ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn init_logging(&self) -> anyhow::Result<()> {
        let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();

        TermLogger::init(self.log_level(), config, TerminalMode::Stderr, ColorChoice::Auto)
            .context("Failed to initialise logging")
    }

    pub async fn run(self) -> anyhow::Result<()> {
        self.init_logging()?;

        if self.no_color {
            colored::control::set_override(false);
        }

        let config = Config::from_env();
        debug!("{config:?}");

        let location = config.resolver().resolve(self.city.as_deref())?;
        let source = source_from_config(&config)?;

        let mut stdout = io::stdout().lock();
        show(source.as_ref(), &location, &mut stdout).await
    }
}

/// Fetch the report for `location` and write it to `out`, banner first.
pub async fn show<W: Write>(
    source: &dyn WeatherSource,
    location: &Location,
    out: &mut W,
) -> anyhow::Result<()> {
    render::write_lines(out, &[render::banner(location.as_str()), String::new()])?;

    info!("fetching weather for {location}");
    let report = source.fetch(location).await?;
    info!("{} hourly samples for today", report.today.hourly.len());

    render::write_lines(out, &render::render(&report, location.as_str()))?;

    Ok(())
}
