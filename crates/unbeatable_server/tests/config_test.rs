//! Tests for loading server configuration from disk.

use std::time::Duration;
use tempfile::tempdir;
use unbeatable_server::ServerConfig;

#[test]
fn test_from_file_fills_missing_fields_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unbeatable.toml");
    std::fs::write(
        &path,
        r#"
port = 9000
telegram_chat_id = "-1001"
notify_timeout_secs = 3
"#,
    )
    .unwrap();

    let config = ServerConfig::from_file(&path).unwrap();

    assert_eq!(*config.port(), 9000);
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(config.telegram_chat_id().as_deref(), Some("-1001"));
    assert!(config.telegram_bot_token().is_none());
    assert_eq!(config.telegram_api_base(), "https://api.telegram.org");
    assert_eq!(config.notify_timeout(), Duration::from_secs(3));
    assert_eq!(config.bind_addr(), "127.0.0.1:9000");
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    let err = ServerConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = ServerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_file_values_are_overridden_by_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unbeatable.toml");
    std::fs::write(&path, "host = \"0.0.0.0\"\nport = 9000\n").unwrap();

    let config = ServerConfig::from_file(&path)
        .unwrap()
        .with_env_overrides(|key| (key == "PORT").then(|| "9500".to_string()))
        .unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:9500");
}
