pub use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between resolving a location and holding a
/// parsed report.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Please specify a city")]
    MissingLocation,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Could not fetch weather data (HTTP {status})")]
    Fetch { status: StatusCode },

    #[error("Could not parse weather data: {0}")]
    Parse(String),

    #[error("Could not set up the weather client: {0}")]
    Setup(String),
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

impl WeatherError {
    /// Errors the user is likely to fix by checking their connection.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, WeatherError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{\"current").unwrap_err();
        let err = WeatherError::from(err);

        assert!(matches!(err, WeatherError::Parse(_)));
        assert!(err.to_string().starts_with("Could not parse weather data"));
        assert!(!err.is_connectivity());
    }

    #[test]
    fn fetch_error_mentions_status() {
        let err = WeatherError::Fetch { status: StatusCode::NOT_FOUND };
        assert_eq!(err.to_string(), "Could not fetch weather data (HTTP 404 Not Found)");
    }
}
