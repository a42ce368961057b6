use serde::Deserialize;
use std::env;
use tripdesk_core::{Latency, LatencyProfile};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

fn default_port() -> u16 { 8080 }

/// Simulated latency per operation, in milliseconds
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub search_ms: u64,
    pub lookup_ms: u64,
    pub create_ms: u64,
    pub list_ms: u64,
    pub list_all_ms: u64,
    pub login_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            search_ms: 800,
            lookup_ms: 0,
            create_ms: 1000,
            list_ms: 600,
            list_all_ms: 500,
            login_ms: 800,
        }
    }
}

impl LatencyConfig {
    pub fn profile(&self) -> LatencyProfile {
        LatencyProfile {
            search: Latency::from_millis(self.search_ms),
            lookup: Latency::from_millis(self.lookup_ms),
            create: Latency::from_millis(self.create_ms),
            list: Latency::from_millis(self.list_ms),
            list_all: Latency::from_millis(self.list_all_ms),
            login: Latency::from_millis(self.login_ms),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_placeholder_token")]
    pub placeholder_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { placeholder_token: default_placeholder_token() }
    }
}

fn default_placeholder_token() -> String {
    tripdesk_core::identity::DEFAULT_PLACEHOLDER_TOKEN.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    #[serde(default = "default_seed_demo_booking")]
    pub seed_demo_booking: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { seed_demo_booking: default_seed_demo_booking() }
    }
}

fn default_seed_demo_booking() -> bool { true }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        config::Config::builder()
            // Every key has a default, so even the base file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `TRIPDESK_SERVER__PORT=9000`
            .add_source(
                config::Environment::with_prefix("TRIPDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse a single TOML document
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Settings for tests: no latency, empty ledger
    pub fn for_tests() -> Self {
        Self {
            latency: LatencyConfig {
                search_ms: 0,
                lookup_ms: 0,
                create_ms: 0,
                list_ms: 0,
                list_all_ms: 0,
                login_ms: 0,
            },
            ledger: LedgerConfig { seed_demo_booking: false },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.latency, LatencyConfig::default());
        assert_eq!(config.auth.placeholder_token, "mock-jwt-token");
        assert!(config.ledger.seed_demo_booking);
        assert_eq!(config.latency.profile(), LatencyProfile::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 9100

            [latency]
            search_ms = 0

            [ledger]
            seed_demo_booking = false
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.latency.search_ms, 0);
        assert_eq!(config.latency.create_ms, 1000);
        assert!(!config.ledger.seed_demo_booking);
    }

    #[test]
    fn test_environment_overrides_use_single_underscore_prefix() {
        // Only this test touches TRIPDESK_* variables
        env::set_var("TRIPDESK_SERVER__PORT", "9000");
        env::set_var("TRIPDESK_LATENCY__SEARCH_MS", "5");
        let loaded = Config::load();
        env::remove_var("TRIPDESK_SERVER__PORT");
        env::remove_var("TRIPDESK_LATENCY__SEARCH_MS");

        let config = loaded.unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.latency.search_ms, 5);
        assert_eq!(config.latency.create_ms, 1000);
    }

    #[test]
    fn test_for_tests_has_no_latency() {
        assert_eq!(Config::for_tests().latency.profile(), LatencyProfile::none());
    }
}
