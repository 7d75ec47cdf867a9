use std::env;

/// Base URL of the CWA open-data service
pub const FORECAST_API_BASE: &str = "https://opendata.cwa.gov.tw";

/// Environment variable holding the CWA authorization token
pub const WEATHER_API_KEY_VAR: &str = "CWB_API_KEY";

/// Configuration for the CWA forecast API.
///
/// Isolates the credential lookup so core logic can be tested with injected
/// fake credentials, and so the endpoint can be pointed at a mock server.
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl WeatherApiConfig {
    /// Create a config with an explicit credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: FORECAST_API_BASE.to_string(),
        }
    }

    /// Build the config from the `CWB_API_KEY` environment variable.
    ///
    /// A missing variable is not a local error: the empty credential is sent
    /// upstream, which rejects it, and the caller sees the standard
    /// API-failure outcome.
    pub fn from_env() -> Self {
        Self::new(env::var(WEATHER_API_KEY_VAR).unwrap_or_default())
    }

    /// Override the endpoint base URL (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
