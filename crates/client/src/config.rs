//! Client configuration.

/// Default hosted endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.onlyworlds.com/api/worldapi";

/// Immutable configuration for one client instance.
///
/// Credentials are explicit constructor input, never process-wide state, so
/// clients for different worlds can coexist in one process.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_pin: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_pin: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_pin: api_pin.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host, e.g. a staging deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a config from the `ONLYWORLDS_API_KEY` and `ONLYWORLDS_API_PIN`
    /// environment variables.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("ONLYWORLDS_API_KEY").ok()?;
        let api_pin = std::env::var("ONLYWORLDS_API_PIN").ok()?;
        Some(Self::new(api_key, api_pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::new("key", "pin");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::new("key", "pin").with_base_url("http://localhost:8000/api");
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }
}
