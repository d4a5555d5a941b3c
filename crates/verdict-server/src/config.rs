//! Server configuration

use serde::{Deserialize, Serialize};
use verdict_sdk::EngineConfig;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Log level for the server and SDK crates
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,

    /// Rule engine configuration
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cors_permissive: true,
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// `config/server.{toml,yaml,json}` is optional; `VERDICT_*` variables
    /// override it, with `__` separating nested keys
    /// (e.g. `VERDICT_ENGINE__MAX_DEPTH=32`).
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix("VERDICT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Build configuration from an explicit set of sources
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        match builder.build() {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable config sources ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!(
            "verdict_server={level},verdict_sdk={level},tower_http=debug",
            level = self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.cors_permissive);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_default_log_filter() {
        assert_eq!(
            ServerConfig::default().default_log_filter(),
            "verdict_server=info,verdict_sdk=info,tower_http=debug"
        );
    }

    #[test]
    fn test_server_config_debug_format() {
        let debug_str = format!("{:?}", ServerConfig::default());

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("127.0.0.1"));
        assert!(debug_str.contains("8080"));
    }
}
