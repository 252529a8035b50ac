//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Environment-driven configuration and location resolution
//! - The `WeatherSource` abstraction and its wttr.in client
//! - Typed weather models and the advice heuristics built on them
//!
//! It is used by `wttr-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use location::{Location, LocationResolver};
pub use model::{CurrentConditions, DailyForecast, HourlySample, WeatherReport};
pub use provider::{WeatherSource, source_from_config, wttr::WttrClient};
