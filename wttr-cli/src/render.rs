use std::io::{self, IsTerminal, Write};

use colored::{Color, ColoredString, Colorize};
use wttr_core::{
    HourlySample, WeatherError, WeatherReport,
    advice::{rain_emoji, weather_tip},
};

const RULE_WIDTH: usize = 50;

/// Fixed terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Cyan,
    Yellow,
    Green,
    Blue,
    Red,
    Magenta,
}

impl Tone {
    pub const fn color(self) -> Color {
        match self {
            Tone::Cyan => Color::Cyan,
            Tone::Yellow => Color::Yellow,
            Tone::Green => Color::Green,
            Tone::Blue => Color::Blue,
            Tone::Red => Color::Red,
            Tone::Magenta => Color::Magenta,
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        text.color(self.color())
    }

    pub fn heading(self, text: &str) -> ColoredString {
        self.paint(text).bold()
    }
}

fn rule() -> String {
    Tone::Cyan.paint(&"─".repeat(RULE_WIDTH)).to_string()
}

/// Shown while the request is in flight.
pub fn banner(location: &str) -> String {
    format!(
        "{}{}{}",
        Tone::Cyan.paint("🌤️  Fetching weather for "),
        location.bold(),
        Tone::Cyan.paint("...")
    )
}

fn hourly_line(sample: &HourlySample) -> String {
    format!(
        "{} - {}°C, {} {} {}%",
        Tone::Cyan.paint(&sample.time_label()),
        sample.temperature_c,
        sample.description,
        rain_emoji(sample.chance_of_rain_pct),
        sample.chance_of_rain_pct
    )
}

/// Full report as display lines, top to bottom.
pub fn render(report: &WeatherReport, location: &str) -> Vec<String> {
    let current = &report.current;
    let today = &report.today;

    let mut lines = vec![
        Tone::Blue.heading(&format!("📍 Weather in {location}")).to_string(),
        rule(),
        format!(
            "{} {}°C / {}°F",
            Tone::Yellow.paint("🌡️  Temperature:"),
            current.temperature_c,
            current.temperature_f
        ),
        format!(
            "{} {}°C / {}°F",
            Tone::Yellow.paint("🤔 Feels like:"),
            current.feels_like_c,
            current.feels_like_f
        ),
        format!("{} {}", Tone::Green.paint("☁️  Conditions:"), current.description),
        format!("{} {}%", Tone::Blue.paint("💧 Humidity:"), current.humidity_pct),
        format!(
            "{} {} km/h {}",
            Tone::Blue.paint("💨 Wind:"),
            current.wind_speed_kmph,
            current.wind_direction
        ),
        format!("{} {} hPa", Tone::Blue.paint("🔽 Pressure:"), current.pressure_hpa),
        format!("{} {} km", Tone::Blue.paint("👁️  Visibility:"), current.visibility_km),
        String::new(),
        Tone::Magenta.heading("📅 Today's Forecast").to_string(),
        rule(),
        format!(
            "{} {}°C / {}°C",
            Tone::Yellow.paint("🌡️  High/Low:"),
            today.max_temp_c,
            today.min_temp_c
        ),
        String::new(),
        "⏰ Hourly Forecast".bold().to_string(),
        rule(),
    ];

    lines.extend(today.hourly.iter().map(hourly_line));

    lines.push(String::new());
    lines.push(Tone::Yellow.heading("✨ Fun Weather Facts").to_string());
    lines.push(rule());
    lines.extend(
        weather_tip(current.temperature_c, &current.description, current.humidity_pct)
            .lines()
            .map(str::to_string),
    );

    lines
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Whether error lines should carry ANSI colors. They go to stderr, so the
/// decision follows stderr rather than stdout.
pub fn stderr_wants_color(no_color_flag: bool) -> bool {
    colors_allowed(no_color_flag, std::env::var_os("NO_COLOR").is_some(), io::stderr().is_terminal())
}

fn colors_allowed(no_color_flag: bool, no_color_env: bool, is_terminal: bool) -> bool {
    !no_color_flag && !no_color_env && is_terminal
}

/// Lines describing a failed run, with a hint where one helps.
pub fn error_lines(err: &anyhow::Error) -> Vec<String> {
    let headline = Tone::Red.paint(&format!("Error: {err:#}")).to_string();

    match err.downcast_ref::<WeatherError>() {
        Some(WeatherError::MissingLocation) => {
            vec![headline, format!("Usage: {} [city]", env!("CARGO_BIN_NAME"))]
        }
        Some(e) if e.is_connectivity() => vec![
            headline,
            String::new(),
            Tone::Yellow.paint("💡 Tip: Make sure you have an internet connection").to_string(),
        ],
        _ => vec![headline],
    }
}
