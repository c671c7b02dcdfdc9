//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream coaching/analytics API configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Budget report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Category taxonomy configuration.
    #[serde(default)]
    pub categories: CategoryConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Upstream coaching/analytics API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL the `coach/`, `actuals/` and `summary/` paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Budget report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Serve the labelled sample report when any upstream read fails.
    ///
    /// Off by default: a failed fetch is reported as an error.
    #[serde(default)]
    pub sample_fallback: bool,
}

/// Category taxonomy configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryConfig {
    /// Canonical category -> raw labels folded into it.
    ///
    /// Empty means the built-in taxonomy is used.
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BUDGETCOACH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "RUN_MODE",
                "BUDGETCOACH__SERVER__PORT",
                "BUDGETCOACH__UPSTREAM__BASE_URL",
                "BUDGETCOACH__REPORT__SAMPLE_FALLBACK",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8000);
                assert_eq!(config.upstream.base_url, "http://localhost:3000");
                assert_eq!(config.upstream.timeout_secs, 10);
                assert!(!config.report.sample_fallback);
                assert!(config.categories.aliases.is_empty());
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("BUDGETCOACH__SERVER__PORT", Some("9100")),
                (
                    "BUDGETCOACH__UPSTREAM__BASE_URL",
                    Some("http://fastapi.internal:3000"),
                ),
                ("BUDGETCOACH__REPORT__SAMPLE_FALLBACK", Some("true")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9100);
                assert_eq!(config.upstream.base_url, "http://fastapi.internal:3000");
                assert!(config.report.sample_fallback);
            },
        );
    }

    #[test]
    fn test_category_aliases_deserialize() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [categories.aliases]
                "식비" = ["카페", "배달"]
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = config.try_deserialize().unwrap();
        assert_eq!(
            config.categories.aliases.get("식비"),
            Some(&vec!["카페".to_string(), "배달".to_string()])
        );
    }
}
