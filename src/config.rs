//! Runtime configuration for the dashboard client.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings shared by every page controller.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the REST API, e.g. `https://erp.example.com`.
    pub api_base_url: String,
    /// Page to navigate to when the session is missing or expired.
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_login_url() -> String {
    "/login.html".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_items_per_page() -> usize {
    crate::DEFAULT_ITEMS_PER_PAGE
}

impl DashboardConfig {
    /// Loads the optional `dashboard.yaml` file and `DASHBOARD_`-prefixed
    /// environment variables, `.env` included.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Config::builder()
            .add_source(File::with_name("dashboard").required(false))
            .add_source(Environment::with_prefix("DASHBOARD"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_the_optional_fields() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"api_base_url": "http://localhost:3000"}"#).unwrap();
        assert_eq!(config.login_url, "/login.html");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.items_per_page, crate::DEFAULT_ITEMS_PER_PAGE);
    }
}
