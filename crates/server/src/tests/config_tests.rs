use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(None, env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server_bind, "127.0.0.1:5000");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_overrides_defaults() {
    let raw = r#"
bind_addr = "0.0.0.0:8080"
log_filter = "debug"
"#;
    let settings = load_settings_from(Some(raw), env_from(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn env_overrides_file() {
    let raw = r#"bind_addr = "0.0.0.0:8080""#;
    let settings = load_settings_from(
        Some(raw),
        env_from(&[("SERVER_BIND", "127.0.0.1:9000"), ("RUST_LOG", "warn")]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:9000");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let settings = load_settings_from(
        None,
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:9000"),
            ("APP__BIND_ADDR", "127.0.0.1:9001"),
            ("RUST_LOG", "warn"),
            ("APP__LOG_FILTER", "fake_app=trace"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:9001");
    assert_eq!(settings.log_filter, "fake_app=trace");
}

#[test]
fn malformed_file_is_ignored() {
    let settings = load_settings_from(Some("bind_addr = ["), env_from(&[]));
    assert_eq!(settings, Settings::default());
}
