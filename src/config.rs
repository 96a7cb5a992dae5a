use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::GatewayError;

pub const CONFIG_FILE: &str = "aqi-forecast";
pub const ENV_PREFIX: &str = "AQI_FORECAST";

/// Gateway settings after all layers have been merged.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GatewayConfig {
    /// Address the HTTP server listens on, `IP:PORT`
    pub bind_address: String,
    /// Base URL of the prediction service
    pub upstream_url: String,
    /// Directory holding the compiled frontend
    pub static_dir: PathBuf,
    /// Timeout applied to every incoming request
    pub request_timeout_secs: u64,
    /// Timeout applied to every call to the prediction service
    pub upstream_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            upstream_url: "http://127.0.0.1:5000".to_string(),
            static_dir: PathBuf::from("workspace/frontend/dist"),
            request_timeout_secs: 30,
            upstream_timeout_secs: 20,
        }
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
    pub static_dir: Option<String>,
}

impl GatewayConfig {
    /// Defaults, then `aqi-forecast.toml` if present, then `AQI_FORECAST_*`
    /// environment variables (`.env` included), then `overrides`.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok();
        Self::build(overrides, Some(Environment::with_prefix(ENV_PREFIX)))
    }

    fn build(overrides: &ConfigOverrides, env: Option<Environment>) -> Result<Self, GatewayError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("upstream_url", defaults.upstream_url)?
            .set_default("static_dir", defaults.static_dir.to_string_lossy().into_owned())?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("upstream_timeout_secs", defaults.upstream_timeout_secs as i64)?
            .add_source(File::with_name(CONFIG_FILE).required(false));

        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: GatewayConfig = builder
            .set_override_option("bind_address", overrides.bind_address.clone())?
            .set_override_option("upstream_url", overrides.upstream_url.clone())?
            .set_override_option("static_dir", overrides.static_dir.clone())?
            .build()?
            .try_deserialize()?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        let config = GatewayConfig::build(&ConfigOverrides::default(), None).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.upstream_timeout(), Duration::from_secs(20));
        assert_eq!(config.index_file(), PathBuf::from("workspace/frontend/dist/index.html"));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:8080".to_string()),
            upstream_url: Some("http://predictor:5000".to_string()),
            static_dir: None,
        };

        let config = GatewayConfig::build(&overrides, None).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.upstream_url, "http://predictor:5000");
        assert_eq!(config.static_dir, PathBuf::from("workspace/frontend/dist"));
    }

    #[test]
    fn test_environment_layer() {
        let env = Environment::with_prefix("AQI_FORECAST_TEST").source(Some(
            [
                ("AQI_FORECAST_TEST_UPSTREAM_URL".to_string(), "http://env-host:5000".to_string()),
                ("AQI_FORECAST_TEST_UPSTREAM_TIMEOUT_SECS".to_string(), "5".to_string()),
            ]
            .into_iter()
            .collect(),
        ));

        let config = GatewayConfig::build(&ConfigOverrides::default(), Some(env)).unwrap();
        assert_eq!(config.upstream_url, "http://env-host:5000");
        assert_eq!(config.upstream_timeout_secs, 5);
        assert_eq!(config.bind_address, "0.0.0.0:3000");
    }
}
