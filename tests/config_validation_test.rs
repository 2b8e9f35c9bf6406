use permitd::config::{AppConfig, LogFormat, LoggingSection, ServerConfig};

#[test]
fn defaults_bind_all_interfaces_on_port_8000() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn bind_addr_joins_host_and_port() {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 9100,
        },
        ..Default::default()
    };

    assert_eq!(config.bind_addr(), "127.0.0.1:9100");
}

#[test]
fn log_format_deserializes_lowercase_names() {
    let logging: LoggingSection =
        serde_json::from_value(serde_json::json!({ "format": "text", "level": "debug" }))
            .expect("logging section should deserialize");

    assert_eq!(logging.format, LogFormat::Text);
    assert_eq!(logging.level, "debug");
}
