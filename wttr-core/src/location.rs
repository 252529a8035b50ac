use std::fmt;

use crate::error::WeatherError;

/// A free-text place name, kept exactly as given and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Location {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(WeatherError::MissingLocation);
        }
        Ok(Location(value.to_string()))
    }
}

/// Picks the location to query: explicit argument, then the preferred
/// location, then the fallback.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    preferred: Option<String>,
    fallback: String,
}

impl LocationResolver {
    pub fn new(preferred: Option<String>, fallback: impl Into<String>) -> Self {
        Self { preferred, fallback: fallback.into() }
    }

    pub fn resolve(&self, argument: Option<&str>) -> Result<Location, WeatherError> {
        let chosen = [argument, self.preferred.as_deref()]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(self.fallback.as_str());

        Location::try_from(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_preferred_location() {
        let resolver = LocationResolver::new(Some("Paris".into()), "London");
        let location = resolver.resolve(Some("São Paulo")).unwrap();

        assert_eq!(location.as_str(), "São Paulo");
    }

    #[test]
    fn falls_back_to_default_without_argument_or_preference() {
        let resolver = LocationResolver::new(None, "London");
        assert_eq!(resolver.resolve(None).unwrap().as_str(), "London");
    }

    #[test]
    fn empty_argument_is_treated_as_absent() {
        let resolver = LocationResolver::new(Some("Tokyo".into()), "London");
        assert_eq!(resolver.resolve(Some("")).unwrap().as_str(), "Tokyo");

        let resolver = LocationResolver::new(None, "London");
        assert_eq!(resolver.resolve(Some("")).unwrap().as_str(), "London");
    }

    #[test]
    fn argument_is_returned_verbatim() {
        let resolver = LocationResolver::new(Some("Paris".into()), "London");

        assert_eq!(resolver.resolve(Some(" New York ")).unwrap().as_str(), " New York ");
        assert_eq!(resolver.resolve(Some("   ")).unwrap().as_str(), "   ");
    }

    #[test]
    fn empty_fallback_is_a_missing_location() {
        let resolver = LocationResolver::new(None, "");
        let err = resolver.resolve(None).unwrap_err();

        assert!(matches!(err, WeatherError::MissingLocation));
    }

    #[test]
    fn location_keeps_surrounding_whitespace() {
        let location = Location::try_from("  New York \n").unwrap();
        assert_eq!(location.to_string(), "  New York \n");
    }
}
