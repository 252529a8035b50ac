use std::{fmt::Display, str::FromStr};

use async_trait::async_trait;
use chrono::NaiveTime;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder, Url};
use serde::Deserialize;

use crate::{
    error::WeatherError,
    location::Location,
    model::{CurrentConditions, DailyForecast, HourlySample, WeatherReport},
};

use super::WeatherSource;

/// Client for wttr.in's `format=j1` JSON endpoint.
#[derive(Debug, Clone)]
pub struct WttrClient {
    base_url: Url,
    http: Client,
}

impl WttrClient {
    /// Client using the HTTP stack's default timeout.
    pub fn new(base_url: &str) -> Result<Self, WeatherError> {
        Self::build(base_url, Client::builder())
    }

    fn build(base_url: &str, builder: ClientBuilder) -> Result<Self, WeatherError> {
        let url = Url::parse(base_url)
            .map_err(|e| WeatherError::Setup(format!("invalid base URL '{base_url}': {e}")))?;

        if url.cannot_be_a_base() {
            return Err(WeatherError::Setup(format!("base URL '{base_url}' cannot hold a path")));
        }

        let http = builder.build().map_err(|e| WeatherError::Setup(e.to_string()))?;

        Ok(Self { base_url: url, http })
    }

    /// `<base>/<percent-encoded location>?format=j1`
    pub fn location_url(&self, location: &Location) -> Result<Url, WeatherError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| {
                WeatherError::Setup(format!("base URL '{}' cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .push(location.as_str());
        url.query_pairs_mut().append_pair("format", "j1");

        Ok(url)
    }
}

#[async_trait]
impl WeatherSource for WttrClient {
    async fn fetch(&self, location: &Location) -> Result<WeatherReport, WeatherError> {
        let url = self.location_url(location)?;
        debug!("GET {url}");

        let res = self.http.get(url).send().await.map_err(WeatherError::Network)?;

        let status = res.status();
        if !status.is_success() {
            debug!("wttr.in answered {status}");
            return Err(WeatherError::Fetch { status });
        }

        let body = res.text().await.map_err(WeatherError::Network)?;
        debug!("received {} bytes of weather data", body.len());

        parse_report(&body)
    }
}

/// Decode a j1 body into a typed report.
///
/// Current conditions and the daily summary are required; a malformed hourly
/// entry is logged and left out of the forecast.
pub fn parse_report(body: &str) -> Result<WeatherReport, WeatherError> {
    let raw: J1Response = serde_json::from_str(body)?;

    let current = raw
        .current_condition
        .into_iter()
        .next()
        .ok_or_else(|| missing("current_condition"))?;
    let today = raw.weather.into_iter().next().ok_or_else(|| missing("weather"))?;

    Ok(WeatherReport { current: current.try_into()?, today: today.try_into()? })
}

// wttr.in sends every number as a JSON string.

#[derive(Debug, Deserialize)]
struct J1Response {
    current_condition: Vec<J1Current>,
    weather: Vec<J1Day>,
}

#[derive(Debug, Deserialize)]
struct J1Text {
    value: String,
}

#[derive(Debug, Deserialize)]
struct J1Current {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "temp_F")]
    temp_f: String,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: String,
    #[serde(rename = "FeelsLikeF")]
    feels_like_f: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<J1Text>,
    humidity: String,
    #[serde(rename = "windspeedKmph")]
    wind_speed_kmph: String,
    #[serde(rename = "winddir16Point")]
    wind_dir: String,
    pressure: String,
    visibility: String,
}

#[derive(Debug, Deserialize)]
struct J1Day {
    #[serde(rename = "maxtempC")]
    max_temp_c: String,
    #[serde(rename = "mintempC")]
    min_temp_c: String,
    // Kept loose so one bad hour doesn't sink the whole report.
    #[serde(default)]
    hourly: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct J1Hour {
    time: String,
    #[serde(rename = "tempC")]
    temp_c: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<J1Text>,
    #[serde(rename = "chanceofrain")]
    chance_of_rain: String,
}

impl TryFrom<J1Current> for CurrentConditions {
    type Error = WeatherError;

    fn try_from(raw: J1Current) -> Result<Self, Self::Error> {
        Ok(CurrentConditions {
            temperature_c: number("temp_C", &raw.temp_c)?,
            temperature_f: number("temp_F", &raw.temp_f)?,
            feels_like_c: number("FeelsLikeC", &raw.feels_like_c)?,
            feels_like_f: number("FeelsLikeF", &raw.feels_like_f)?,
            description: first_text("weatherDesc", raw.weather_desc)?,
            humidity_pct: number("humidity", &raw.humidity)?,
            wind_speed_kmph: number("windspeedKmph", &raw.wind_speed_kmph)?,
            wind_direction: raw.wind_dir,
            pressure_hpa: number("pressure", &raw.pressure)?,
            visibility_km: number("visibility", &raw.visibility)?,
        })
    }
}

impl TryFrom<J1Day> for DailyForecast {
    type Error = WeatherError;

    fn try_from(raw: J1Day) -> Result<Self, Self::Error> {
        Ok(DailyForecast {
            max_temp_c: number("maxtempC", &raw.max_temp_c)?,
            min_temp_c: number("mintempC", &raw.min_temp_c)?,
            hourly: hourly_samples(raw.hourly),
        })
    }
}

impl TryFrom<J1Hour> for HourlySample {
    type Error = WeatherError;

    fn try_from(raw: J1Hour) -> Result<Self, Self::Error> {
        let hhmm: u32 = number("time", &raw.time)?;
        let time = NaiveTime::from_hms_opt(hhmm / 100, hhmm % 100, 0).ok_or_else(|| {
            WeatherError::Parse(format!("field `time` = {:?} is not a time of day", raw.time))
        })?;

        Ok(HourlySample {
            time,
            temperature_c: number("tempC", &raw.temp_c)?,
            description: first_text("weatherDesc", raw.weather_desc)?,
            chance_of_rain_pct: number("chanceofrain", &raw.chance_of_rain)?,
        })
    }
}

fn hourly_samples(entries: Vec<serde_json::Value>) -> Vec<HourlySample> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let sample = serde_json::from_value::<J1Hour>(entry)
                .map_err(WeatherError::from)
                .and_then(HourlySample::try_from);

            match sample {
                Ok(sample) => Some(sample),
                Err(err) => {
                    warn!("skipping hourly entry #{index}: {err}");
                    None
                }
            }
        })
        .collect()
}

fn number<T>(field: &str, raw: &str) -> Result<T, WeatherError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| WeatherError::Parse(format!("field `{field}` = {raw:?}: {e}")))
}

fn first_text(field: &str, values: Vec<J1Text>) -> Result<String, WeatherError> {
    values.into_iter().next().map(|t| t.value).ok_or_else(|| missing(field))
}

fn missing(field: &str) -> WeatherError {
    WeatherError::Parse(format!("missing field `{field}`"))
}
