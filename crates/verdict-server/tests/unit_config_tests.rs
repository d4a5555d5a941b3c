//! Unit tests for ServerConfig loading

use config::{Config, File, FileFormat};
use verdict_server::config::{LogFormat, ServerConfig};

#[test]
fn test_empty_sources_give_defaults() {
    let config = ServerConfig::from_builder(Config::builder()).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_toml_overrides_with_nested_engine() {
    let toml = r#"
        host = "0.0.0.0"
        port = 9000
        log_format = "json"
        cors_permissive = false

        [engine]
        max_depth = 16
        short_circuit = false
    "#;

    let config =
        ServerConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
            .unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:9000");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.cors_permissive);
    assert_eq!(config.engine.max_depth, 16);
    assert!(!config.engine.short_circuit);
    // untouched keys keep their defaults
    assert_eq!(config.log_level, "info");
    assert_eq!(config.engine.max_rule_length, 4096);
}

#[test]
fn test_invalid_value_is_an_error() {
    let toml = r#"log_format = "xml""#;
    let result =
        ServerConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)));
    assert!(result.is_err());
}
