use super::load_config;
use super::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.log_level, "info");
    assert_eq!(settings.broker.host, "127.0.0.1");
    assert_eq!(settings.broker.port, 1883);
    assert!(settings.broker.client_id.is_none());
    assert_eq!(settings.broker.subscribe_topic, "expo/test");
    assert_eq!(settings.broker.result_topic, "expo/result");
    assert_eq!(settings.broker.status_topic, "expo/status");
    assert_eq!(settings.broker.reconnect_interval_secs, 5);
    assert_eq!(settings.broker.keep_alive_secs, 60);
    assert_eq!(settings.dispatch.max_inflight, 64);
}

/// Restores the original working directory when dropped, including on a
/// panicking assertion partway through the test.
struct CwdGuard(std::path::PathBuf);

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let orig = std::env::current_dir().expect("current_dir");
        std::env::set_current_dir(dir).expect("set current dir");
        Self(orig)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
fn load_config_from_file_overrides_defaults() {
    use std::fs;
    use tempfile::TempDir;

    // Create a temporary directory and set it as current dir so load_config
    // will pick up config/default.toml from there.
    let tmp = TempDir::new().expect("create tempdir");
    let _cwd = CwdGuard::enter(tmp.path());

    fs::create_dir_all("config").expect("create config dir");
    let toml = r#"
        log_level = "debug"

        [broker]
        host = "10.0.0.7"
        port = 8883
        client_id = "ProductClient"
        subscribe_topic = "shop/in"
        reconnect_interval_secs = 2

        [dispatch]
        max_inflight = 4
    "#;
    fs::write("config/default.toml", toml).expect("write config file");

    let cfg = load_config().expect("load_config failed");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.broker.host, "10.0.0.7");
    assert_eq!(cfg.broker.port, 8883);
    assert_eq!(cfg.broker.client_id.as_deref(), Some("ProductClient"));
    assert_eq!(cfg.broker.subscribe_topic, "shop/in");
    assert_eq!(cfg.broker.reconnect_interval_secs, 2);
    assert_eq!(cfg.dispatch.max_inflight, 4);

    // Unspecified keys fall back to defaults.
    assert_eq!(cfg.broker.result_topic, "expo/result");
    assert_eq!(cfg.broker.status_topic, "expo/status");
}
