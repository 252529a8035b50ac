use crate::{Config, Location, WeatherError, WeatherReport, provider::wttr::WttrClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

/// Anything that can turn a location into a weather report.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, location: &Location) -> Result<WeatherReport, WeatherError>;
}

/// Construct the wttr.in source described by `config`.
pub fn source_from_config(config: &Config) -> Result<Box<dyn WeatherSource>, WeatherError> {
    let client = WttrClient::new(&config.service_url)?;
    Ok(Box::new(client))
}
