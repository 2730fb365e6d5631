use std::io::Write;

use brewery::config::{AppConfig, LogFormat};
use brewery::store::StoreConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_use_stub_store_and_json_logs() {
    let config = AppConfig::default();

    assert_eq!(config.store.backend, StoreConfig::Stub);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.store.backend, StoreConfig::Stub);
    assert_eq!(config.server.port, 8080);
}

#[test]
fn file_selects_memory_store_and_text_logs() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9090

[store]
backend = "memory"

[logging]
level = "debug"
format = "text"
"#,
    );

    let config = AppConfig::load_from(file.path()).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    assert_eq!(config.store.backend, StoreConfig::Memory);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn blank_log_level_normalises_to_info() {
    let file = write_config(
        r#"
[logging]
level = "   "
"#,
    );

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.logging.level, "info");
}

#[test]
fn unknown_store_backend_is_rejected() {
    let file = write_config(
        r#"
[store]
backend = "postgres"
"#,
    );

    assert!(AppConfig::load_from(file.path()).is_err());
}
