use std::env;
use std::time::Duration;

use justride_booking::ExportOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub export: ExportOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Artificial delay before login/register touch the store
    #[serde(default = "default_auth_latency_ms")]
    pub auth_latency_ms: u64,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
}

fn default_auth_latency_ms() -> u64 {
    1000
}

fn default_sidebar_open() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_latency_ms: default_auth_latency_ms(),
            sidebar_open: default_sidebar_open(),
        }
    }
}

impl SessionConfig {
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "justride=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `JUSTRIDE__SESSION__AUTH_LATENCY_MS=0`
            .add_source(config::Environment::with_prefix("JUSTRIDE").separator("__"))
            .build()?;

        Self::from_source(s)
    }

    /// Deserialize and check values serde cannot check on its own
    pub fn from_source(source: config::Config) -> Result<Self, config::ConfigError> {
        let config: Self = source.try_deserialize()?;
        config
            .export
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.session.auth_latency(), Duration::from_millis(1000));
        assert!(config.session.sidebar_open);
        assert_eq!(config.export.date_format, "%-m/%-d/%Y");
        assert_eq!(config.export.agent_placeholder, "-");
        assert_eq!(config.logging.filter, "justride=info");
    }

    #[test]
    fn test_invalid_date_format_rejected_at_load() {
        let source = config::Config::builder()
            .set_override("export.date_format", "%Q")
            .unwrap()
            .build()
            .unwrap();

        let err = Config::from_source(source).unwrap_err();
        assert!(err.to_string().contains("Invalid date format: %Q"));
    }

    #[test]
    fn test_partial_override() {
        let config: Config = config::Config::builder()
            .set_override("session.auth_latency_ms", 0)
            .unwrap()
            .set_override("export.agent_placeholder", "n/a")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.session.auth_latency_ms, 0);
        assert!(config.session.sidebar_open);
        assert_eq!(config.export.agent_placeholder, "n/a");
        assert_eq!(config.export.date_format, "%-m/%-d/%Y");
    }
}
