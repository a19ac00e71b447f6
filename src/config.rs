//! Process-wide configuration, resolved once at startup.

use clap::Args;
use std::fmt;

/// Mapbox forward-geocoding endpoint; `/{query}.json` is appended per request.
pub const DEFAULT_API_BASE: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Read-only settings shared by every request.
///
/// Built from flags or the environment (a `.env` file is honored) and handed
/// to [`crate::server::build_router`]. Nothing reads the environment after this.
#[derive(Clone, Args)]
pub struct Config {
    /// Mapbox access token, sent upstream as `access_token`.
    /// Not validated locally; an empty token is rejected by the provider.
    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true, hide_default_value = true)]
    pub api_key: String,

    /// Geocoding endpoint base URL.
    #[arg(long, env = "GEOCODE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

// Keeps the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("api_key", &key)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_mapbox_base() {
        let config = Config::new("pk.test");
        assert_eq!(config.api_key, "pk.test");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_with_api_base() {
        let config = Config::new("pk.test").with_api_base("http://127.0.0.1:9/places");
        assert_eq!(config.api_base, "http://127.0.0.1:9/places");
    }

    #[test]
    fn test_debug_redacts_key() {
        let shown = format!("{:?}", Config::new("pk.secret"));
        assert!(!shown.contains("pk.secret"));
        assert!(shown.contains("<redacted>"));

        let unset = format!("{:?}", Config::new(""));
        assert!(unset.contains("<unset>"));
    }
}
