use crate::location::LocationResolver;

/// Environment variable holding the preferred location.
pub const LOCATION_ENV: &str = "WEATHER_LOCATION";

/// Environment variable overriding the weather service base URL.
pub const SERVICE_URL_ENV: &str = "WTTR_URL";

pub const DEFAULT_LOCATION: &str = "London";
pub const DEFAULT_SERVICE_URL: &str = "http://wttr.in";

/// Runtime settings. There is no config file; everything comes from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location used when no argument is given, e.g. "Berlin".
    pub preferred_location: Option<String>,

    pub service_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { preferred_location: None, service_url: DEFAULT_SERVICE_URL.to_string() }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            preferred_location: non_blank(LOCATION_ENV),
            service_url: non_blank(SERVICE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
        }
    }

    pub fn resolver(&self) -> LocationResolver {
        LocationResolver::new(self.preferred_location.clone(), DEFAULT_LOCATION)
    }
}
